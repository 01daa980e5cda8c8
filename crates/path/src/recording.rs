//! A surface that records instructions.

use crate::surface::{Instruction, Surface};

/// Keeps every instruction it receives, in order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Recording {
    instructions: Vec<Instruction>,
}

impl Recording {
    pub fn new() -> Self {
        Recording {
            instructions: Vec::new(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of `Fill` and `Stroke` instructions.
    pub fn paint_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Fill | Instruction::Stroke))
            .count()
    }
}

impl Surface for Recording {
    #[inline]
    fn apply(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

#[test]
fn record_a_fill() {
    use crate::math::point;

    let mut rec = Recording::new();
    assert!(rec.is_empty());

    rec.save();
    rec.begin_path();
    rec.move_to(point(0.0, 0.0));
    rec.quadratic_curve_to(point(1.0, 1.0), point(2.0, 0.0));
    rec.fill();
    rec.restore();

    assert_eq!(rec.paint_count(), 1);
    assert_eq!(rec.instructions().len(), 6);
    assert_eq!(
        rec.instructions()[3],
        Instruction::QuadraticCurveTo {
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0)
        }
    );
}
