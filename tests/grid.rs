use approx::assert_abs_diff_eq;
use wavegrid::{
    error::GridError,
    grid::{ Grid, TimeAxis },
};

#[test]
fn default_step_grid_has_fifty_points() {
    let grid = Grid::new(0.02, (0.0, 1.0)).unwrap();
    assert_eq!(grid.len(), 50);
    assert_eq!(grid.get_x().len(), 50);
    assert_eq!(grid.get_dx(), 0.02);
    assert_eq!(grid.get_range(), (0.0, 1.0));
    assert_abs_diff_eq!(grid.get_x()[0], 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(grid.get_x()[49], 1.0, epsilon = 1e-15);
}

#[test]
fn grid_coordinates_are_uniform_and_increasing() {
    let grid = Grid::new(0.1, (-1.0, 2.0)).unwrap();
    let x = grid.get_x();
    let n = grid.len();
    assert_eq!(n, 30);
    // linspace spacing is extent / (n - 1), close to but not exactly dx
    let spacing = (2.0 - (-1.0)) / (n as f64 - 1.0);
    for k in 1..n {
        let diff = x[k] - x[k - 1];
        assert!(diff > 0.0, "coordinates must increase; got step {}", diff);
        assert_abs_diff_eq!(diff, spacing, epsilon = 1e-12);
    }
}

#[test]
fn grid_rejects_degenerate_parameters() {
    assert!(matches!(
        Grid::new(0.0, (0.0, 1.0)),
        Err(GridError::BadDx(_)),
    ));
    assert!(matches!(
        Grid::new(-0.02, (0.0, 1.0)),
        Err(GridError::BadDx(_)),
    ));
    assert!(matches!(
        Grid::new(0.02, (1.0, 0.0)),
        Err(GridError::BadXRange(_, _)),
    ));
    assert!(matches!(
        Grid::new(0.02, (0.5, 0.5)),
        Err(GridError::BadXRange(_, _)),
    ));
    assert!(matches!(
        Grid::new(0.5, (0.0, 1.0)),
        Err(GridError::TooFewPoints(2)),
    ));
}

#[test]
fn time_axis_counts_steps_from_trange() {
    let times = TimeAxis::new(1e-4, (0.0, 0.01)).unwrap();
    assert_eq!(times.len(), 100);
    assert_eq!(times.get_dt(), 1e-4);
    assert_eq!(times.get_range(), (0.0, 0.01));
    assert_abs_diff_eq!(times.get_t()[0], 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(times.get_t()[99], 0.01, epsilon = 1e-15);
}

#[test]
fn time_axis_rejects_degenerate_parameters() {
    assert!(matches!(
        TimeAxis::new(0.0, (0.0, 1.0)),
        Err(GridError::BadDt(_)),
    ));
    assert!(matches!(
        TimeAxis::new(-1e-4, (0.0, 1.0)),
        Err(GridError::BadDt(_)),
    ));
    assert!(matches!(
        TimeAxis::new(1e-4, (1.0, 0.0)),
        Err(GridError::BadTRange(_, _)),
    ));
    assert!(matches!(
        TimeAxis::new(1.0, (0.0, 1.0)),
        Err(GridError::TooFewSteps(1)),
    ));
}
