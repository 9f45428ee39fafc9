//! Integration test: scripted operations against a `Vec` reference model.
//!
//! Replays seeded random scripts on a `DynamicArray<i64>` and a `Vec<i64>`
//! side by side. After every step both must hold the same values and agree
//! on failures, and the array's length/capacity invariants must hold.

use dynarr_core::ResizePolicy;
use dynarr_store::DynamicArray;
use dynarr_test_utils::{Op, OpScript};

fn replay(script: &OpScript, mut array: DynamicArray<i64>) {
    let mut model = Vec::new();
    for (step, op) in script.ops().iter().enumerate() {
        let got = op.apply(&mut array);
        let expected = op.apply_model(&mut model);
        assert_eq!(got, expected, "step {step}: {op:?}");

        assert!(array.len() <= array.capacity(), "step {step}");
        assert_eq!(array.len(), model.len(), "step {step}");
        if got.is_ok() && matches!(op, Op::PopBack | Op::Remove(_)) {
            let spare = array.capacity() - array.len();
            assert!(
                spare <= array.policy().shrink_threshold,
                "step {step}: {spare} spare slots survived a removal"
            );
        }
    }
    let values: Vec<i64> = array.iter().map(|h| **h).collect();
    assert_eq!(values, model);
}

#[test]
fn fixed_step_policy_matches_model() {
    for seed in 0..16 {
        let script = OpScript::generate(seed, 2_000, 64);
        replay(&script, DynamicArray::new());
    }
}

#[test]
fn doubling_policy_matches_model() {
    for seed in 100..116 {
        let script = OpScript::generate(seed, 2_000, 64);
        let array = DynamicArray::with_policy(ResizePolicy::doubling()).unwrap();
        replay(&script, array);
    }
}

#[test]
fn zero_initial_capacity_matches_model() {
    let script = OpScript::generate(42, 1_000, 16);
    replay(&script, DynamicArray::with_capacity(0));
}

#[test]
fn handcrafted_script_round_trip() {
    let script = OpScript::from_ops(vec![
        Op::PushBack(1),
        Op::PushBack(2),
        Op::Insert(1, 9),
        Op::Remove(1),
        Op::Insert(3, 4),
        Op::Remove(5),
        Op::PopBack,
        Op::PopBack,
        Op::PopBack,
        Op::PopBack,
    ]);
    replay(&script, DynamicArray::new());
}
