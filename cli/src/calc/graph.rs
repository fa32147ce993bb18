use crate::calc::error::CalcError;
use crate::calc::parser::parse_expression;
use crate::config::GraphRange;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Sample `f(x)` across `range`.
///
/// The expression is parsed once. x values are computed as
/// `x_min + i * step` so the sample grid does not drift. Points whose
/// y is not finite (poles, domain errors) are left out. Ranges needing
/// more than `range.max_points` samples are rejected before evaluating.
pub fn sample_graph(expression: &str, range: &GraphRange) -> Result<Vec<Point>, CalcError> {
    let expr = parse_expression(expression)?;

    let intervals = ((range.x_max - range.x_min) / range.step + 1e-9).floor();
    if !intervals.is_finite() || intervals < 0.0 || intervals + 1.0 > range.max_points as f64 {
        tracing::debug!(expression, ?range, "graph range over sample limit");
        return Err(CalcError::TooManySamples {
            max: range.max_points,
        });
    }
    let steps = intervals as usize;
    let mut points = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let x = range.x_min + i as f64 * range.step;
        let y = expr.eval(Some(x))?;
        if y.is_finite() {
            points.push(Point { x, y });
        }
    }

    tracing::debug!(expression, samples = steps + 1, kept = points.len(), "sampled graph");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_has_41_samples() {
        let points = sample_graph("x^2", &GraphRange::default()).unwrap();
        assert_eq!(points.len(), 41);
        assert_eq!(points[0], Point { x: -10.0, y: 100.0 });
        assert_eq!(points[20], Point { x: 0.0, y: 0.0 });
        assert_eq!(points[40], Point { x: 10.0, y: 100.0 });
    }

    #[test]
    fn test_drops_non_finite_points() {
        let points = sample_graph("1/x", &GraphRange::default()).unwrap();
        assert_eq!(points.len(), 40);
        assert!(points.iter().all(|p| p.x != 0.0));

        let points = sample_graph("sqrt(x)", &GraphRange::default()).unwrap();
        assert_eq!(points.len(), 21);
    }

    #[test]
    fn test_custom_range() {
        let range = GraphRange {
            x_min: 0.0,
            x_max: 1.0,
            step: 0.25,
            ..GraphRange::default()
        };
        let ys: Vec<f64> = sample_graph("2x + 1", &range)
            .unwrap()
            .into_iter()
            .map(|p| p.y)
            .collect();
        assert_eq!(ys, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn test_tiny_step_is_rejected() {
        let range = GraphRange {
            step: 1e-300,
            ..GraphRange::default()
        };
        assert!(range.validate().is_ok());
        assert_eq!(
            sample_graph("x", &range),
            Err(CalcError::TooManySamples { max: 100_000 })
        );
    }

    #[test]
    fn test_huge_range_is_rejected() {
        let range = GraphRange {
            x_min: -1e308,
            x_max: 1e308,
            ..GraphRange::default()
        };
        assert!(range.validate().is_ok());
        assert_eq!(
            sample_graph("x", &range),
            Err(CalcError::TooManySamples { max: 100_000 })
        );
    }

    #[test]
    fn test_sample_cap_is_inclusive() {
        let range = GraphRange {
            x_min: 0.0,
            x_max: 4.0,
            step: 1.0,
            max_points: 5,
        };
        assert_eq!(sample_graph("x", &range).unwrap().len(), 5);
        let range = GraphRange {
            max_points: 4,
            ..range
        };
        assert_eq!(
            sample_graph("x", &range),
            Err(CalcError::TooManySamples { max: 4 })
        );
    }

    #[test]
    fn test_errors_propagate() {
        assert!(sample_graph("x +", &GraphRange::default()).is_err());
        assert_eq!(
            sample_graph("y^2", &GraphRange::default()),
            Err(CalcError::UnknownIdentifier("y".to_string()))
        );
    }
}
