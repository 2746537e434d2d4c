//! The die value object.

use std::any::Any;
use std::hash::{Hash, Hasher};

use polydice_core::error::DiceError;
use polydice_core::rng::DiceRng;

use crate::face::DieFace;

/// A single die: a fixed face count plus the value it currently shows.
///
/// The face count is set at construction and never changes; the value is
/// replaced by every roll and always sits in `[1, faces]`.
///
/// Equality, ordering, and hashing look at the current value only — a 3 on
/// a d4 equals a 3 on a d20. Face count never enters the comparison.
#[derive(Debug, Clone)]
pub struct Die {
    face: DieFace,
    value: u32,
}

impl Die {
    /// Creates a die of the given size and immediately rolls it once to
    /// establish the initial value.
    #[must_use]
    pub fn new(face: DieFace, rng: &mut dyn DiceRng) -> Self {
        let mut die = Self { face, value: 1 };
        die.roll(rng);
        die
    }

    /// Creates a die from a raw face count.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidDieType` if the count is not one of the
    /// supported [`DieFace`] members.
    pub fn with_faces(faces: u32, rng: &mut dyn DiceRng) -> Result<Self, DiceError> {
        Ok(Self::new(DieFace::try_from(faces)?, rng))
    }

    /// Returns the die size.
    #[must_use]
    pub fn face(&self) -> DieFace {
        self.face
    }

    /// Returns the value currently shown.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Rolls the die, replacing and returning the shown value.
    ///
    /// The generator is reseeded immediately before the draw, so every roll
    /// restarts its sequence: consecutive rolls of the same face count are
    /// not independent draws from a running stream.
    pub fn roll(&mut self, rng: &mut dyn DiceRng) -> u32 {
        rng.reseed();
        self.value = rng.next_u32_range(1, self.face.faces());
        tracing::trace!(faces = self.face.faces(), value = self.value, "die rolled");
        self.value
    }

    /// Rolls the die `times` times and returns the results in order.
    ///
    /// Each roll reseeds the generator, exactly as [`Die::roll`] does.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidArgument` if `times` is not positive.
    pub fn roll_many(
        &mut self,
        times: i64,
        rng: &mut dyn DiceRng,
    ) -> Result<Vec<u32>, DiceError> {
        let count = usize::try_from(times)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(DiceError::InvalidArgument(times))?;
        Ok((0..count).map(|_| self.roll(rng)).collect())
    }

    /// Compares shown values against an arbitrary operand.
    ///
    /// Returns `false` for any operand that is not a `Die`. Unlike the
    /// ordering comparisons this never fails; the asymmetry is part of the
    /// contract.
    #[must_use]
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.value == other.value)
    }

    /// Whether this die shows a lower value than the operand.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::TypeMismatch` if the operand is not a `Die`.
    pub fn less_than(&self, other: &dyn Any) -> Result<bool, DiceError> {
        let other = other
            .downcast_ref::<Self>()
            .ok_or(DiceError::TypeMismatch)?;
        Ok(self.value < other.value)
    }

    /// Whether this die shows a higher value than the operand.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::TypeMismatch` if the operand is not a `Die`.
    pub fn greater_than(&self, other: &dyn Any) -> Result<bool, DiceError> {
        let other = other
            .downcast_ref::<Self>()
            .ok_or(DiceError::TypeMismatch)?;
        Ok(self.value > other.value)
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Die {}

// Hash must agree with the value-only equality above.
impl Hash for Die {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use polydice_core::rng::FixedSeedRng;
    use polydice_test_support::{MockRng, SequenceRng};

    use super::*;

    fn hash_of(die: &Die) -> u64 {
        let mut hasher = DefaultHasher::new();
        die.hash(&mut hasher);
        hasher.finish()
    }

    // --- construction tests ---

    #[test]
    fn test_new_rolls_once_for_initial_value() {
        let mut rng = SequenceRng::new(vec![5]);
        let die = Die::new(DieFace::D8, &mut rng);
        assert_eq!(die.value(), 5);
        assert_eq!(die.face(), DieFace::D8);
    }

    #[test]
    fn test_new_value_in_range_for_every_face() {
        let mut rng = FixedSeedRng::default();
        for face in DieFace::ALL {
            let die = Die::new(face, &mut rng);
            assert!(
                (1..=face.faces()).contains(&die.value()),
                "value {} out of range for {face:?}",
                die.value()
            );
        }
    }

    #[test]
    fn test_with_faces_accepts_supported_counts() {
        let mut rng = MockRng;
        let die = Die::with_faces(12, &mut rng).unwrap();
        assert_eq!(die.face(), DieFace::D12);
    }

    #[test]
    fn test_with_faces_rejects_unsupported_count() {
        let mut rng = MockRng;
        match Die::with_faces(7, &mut rng) {
            Err(DiceError::InvalidDieType(7)) => {}
            other => panic!("expected InvalidDieType(7), got {other:?}"),
        }
    }

    // --- roll tests ---

    #[test]
    fn test_roll_reseeds_so_repeat_rolls_match() {
        let mut rng = FixedSeedRng::default();
        let mut die = Die::new(DieFace::D20, &mut rng);
        let first = die.roll(&mut rng);
        let second = die.roll(&mut rng);
        assert_eq!(first, second);
        assert_eq!(die.value(), second);
    }

    #[test]
    fn test_fresh_dice_of_same_face_roll_identically() {
        let mut rng = FixedSeedRng::default();
        let a = Die::new(DieFace::D6, &mut rng);
        let b = Die::new(DieFace::D6, &mut rng);
        assert_eq!(a.value(), b.value());
        assert!(a.equals(&b));
    }

    #[test]
    fn test_roll_replaces_stored_value() {
        let mut rng = SequenceRng::new(vec![2, 6]);
        let mut die = Die::new(DieFace::D6, &mut rng);
        assert_eq!(die.value(), 2);
        assert_eq!(die.roll(&mut rng), 6);
        assert_eq!(die.value(), 6);
    }

    // --- roll_many tests ---

    #[test]
    fn test_roll_many_returns_ordered_results() {
        let mut rng = SequenceRng::new(vec![1, 4, 2, 3]);
        let mut die = Die::new(DieFace::D4, &mut rng);
        let rolls = die.roll_many(3, &mut rng).unwrap();
        assert_eq!(rolls, vec![4, 2, 3]);
        assert_eq!(die.value(), 3);
    }

    #[test]
    fn test_roll_many_with_fixed_seed_repeats_one_value() {
        // Every roll reseeds, so the whole batch restarts the sequence and
        // lands on the same value.
        let mut rng = FixedSeedRng::default();
        let mut die = Die::new(DieFace::D20, &mut rng);
        let rolls = die.roll_many(3, &mut rng).unwrap();
        assert_eq!(rolls.len(), 3);
        assert!(rolls.iter().all(|value| (1..=20).contains(value)));
        assert!(rolls.iter().all(|value| *value == rolls[0]));
    }

    #[test]
    fn test_roll_many_rejects_zero() {
        let mut rng = MockRng;
        let mut die = Die::new(DieFace::D6, &mut rng);
        match die.roll_many(0, &mut rng) {
            Err(DiceError::InvalidArgument(0)) => {}
            other => panic!("expected InvalidArgument(0), got {other:?}"),
        }
    }

    #[test]
    fn test_roll_many_rejects_negative_count() {
        let mut rng = MockRng;
        let mut die = Die::new(DieFace::D6, &mut rng);
        match die.roll_many(-1, &mut rng) {
            Err(DiceError::InvalidArgument(-1)) => {}
            other => panic!("expected InvalidArgument(-1), got {other:?}"),
        }
    }

    // --- comparison tests ---

    #[test]
    fn test_equal_values_compare_equal_across_face_counts() {
        let mut rng = SequenceRng::new(vec![3, 3]);
        let small = Die::new(DieFace::D4, &mut rng);
        let large = Die::new(DieFace::D20, &mut rng);
        assert!(small.equals(&large));
        assert_eq!(small, large);
        assert_eq!(hash_of(&small), hash_of(&large));
    }

    #[test]
    fn test_ordering_compares_values_only() {
        let mut rng = SequenceRng::new(vec![2, 5]);
        let low = Die::new(DieFace::D20, &mut rng);
        let high = Die::new(DieFace::D6, &mut rng);
        assert!(low.less_than(&high).unwrap());
        assert!(high.greater_than(&low).unwrap());
        assert!(!low.greater_than(&high).unwrap());
        assert!(!low.equals(&high));
    }

    #[test]
    fn test_equals_against_non_die_is_false() {
        let mut rng = MockRng;
        let die = Die::new(DieFace::D6, &mut rng);
        assert!(!die.equals(&1_u32));
        assert!(!die.equals(&"die"));
    }

    #[test]
    fn test_ordering_against_non_die_is_type_mismatch() {
        let mut rng = MockRng;
        let die = Die::new(DieFace::D6, &mut rng);
        match die.less_than(&1_u32) {
            Err(DiceError::TypeMismatch) => {}
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
        match die.greater_than(&"die") {
            Err(DiceError::TypeMismatch) => {}
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_is_stable_between_rolls() {
        let mut rng = SequenceRng::new(vec![4]);
        let die = Die::new(DieFace::D8, &mut rng);
        assert_eq!(hash_of(&die), hash_of(&die));
    }
}
