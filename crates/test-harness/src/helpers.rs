use arrangement_types::{Curve, Point, XMonotoneCurve};
use mutation_engine::HarnessServices;

/// Diagnostic sink that echoes to stderr and keeps every line for
/// assertions.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    captured: Vec<String>,
}

impl DiagnosticSink {
    pub fn messages(&self) -> &[String] {
        &self.captured
    }

    pub fn clear(&mut self) {
        self.captured.clear();
    }
}

impl HarnessServices for DiagnosticSink {
    fn print_error(&mut self, message: &str) {
        eprintln!("{message}");
        self.captured.push(message.to_string());
    }
}

/// A fan of `count` disjoint horizontal unit segments, stacked upwards.
pub fn segment_fan(count: usize) -> Vec<XMonotoneCurve> {
    (0..count)
        .map(|i| {
            let y = 2.0 * i as f64;
            XMonotoneCurve::new(Point::new(0.0, y), Point::new(1.0, y))
                .expect("fan endpoints are distinct")
        })
        .collect()
}

/// A zigzag polyline with `points` vertices alternating between y=0 and
/// y=1, one x unit apart.
pub fn zigzag_chain(points: usize) -> Curve {
    let pts = (0..points)
        .map(|i| Point::new(i as f64, (i % 2) as f64))
        .collect();
    Curve::new(pts).expect("zigzag vertices are distinct")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_segments_are_disjoint() {
        let fan = segment_fan(3);
        assert_eq!(fan.len(), 3);
        assert_eq!(fan[2].left().y, 4.0);
    }

    #[test]
    fn zigzag_subdivides_into_point_pairs() {
        let chain = zigzag_chain(4);
        assert_eq!(chain.subdivide().len(), 3);
    }
}
