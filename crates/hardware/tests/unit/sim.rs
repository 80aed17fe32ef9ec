//! Tests for the window-trace replay model: unit selection, end-to-end
//! backpressure handling, and statistics accounting.

use pretty_assertions::assert_eq;
use rvfuse_core::common::error::ConfigError;
use rvfuse_core::config::Config;
use rvfuse_core::core::pipeline::fusion::fuse;
use rvfuse_core::core::pipeline::signals::{FusionSlot, OpClass};
use rvfuse_core::sim::{FusionModel, ModelOutput, StepInput};

use crate::common::builders::{addi, chained_addi, chained_load, other};

fn narrow_model() -> FusionModel {
    FusionModel::new(Config::default()).expect("default config is scannable")
}

fn wide_model() -> FusionModel {
    let config =
        Config::from_json(r#"{ "fusion": { "window_width": 3 } }"#).expect("valid config");
    FusionModel::new(config).expect("wide config is scannable")
}

#[test]
fn rejects_an_unscannable_window_width() {
    let mut config = Config::default();
    config.fusion.window_width = 5;
    assert!(matches!(
        FusionModel::new(config),
        Err(ConfigError::Unsupported(_))
    ));
}

#[test]
fn stall_trace_accounts_every_hold_event() {
    let mut model = narrow_model();
    let producer = addi(0x10, 5, 1, 0x40);
    let consumer = chained_load(0x14, OpClass::LoadWord, 5, 8);
    let expected = fuse(&producer, &consumer);

    let trace = vec![
        StepInput {
            window: vec![producer, consumer],
            ready: [true, false],
            reset: false,
        },
        StepInput::new(vec![other(0x10), other(0x18)]),
        StepInput::new(vec![other(0x18), other(0x1c)]),
    ];
    let outputs = model.run(&trace);

    // The held fusion re-presents itself on slot 0 in the second step.
    match &outputs[1] {
        ModelOutput::Narrow(out) => {
            assert_eq!(out.slots[0], expected);
            assert!(out.first_valid);
        }
        ModelOutput::Wide(_) => panic!("narrow model produced a wide output"),
    }

    let stats = model.stats();
    assert_eq!(stats.steps, 3);
    assert_eq!(stats.fused_add_load, 1);
    assert_eq!(stats.fused_add_add, 0);
    assert_eq!(stats.pass_throughs, 2);
    assert_eq!(stats.stall_holds, 1);
    assert_eq!(stats.stall_replays, 1);
    assert_eq!(stats.stall_retires, 1);
    assert_eq!(stats.stall_overwrites, 0);
    assert_eq!(stats.resets, 0);
    assert_eq!(stats.slots_freed(), 1);
}

#[test]
fn back_to_back_holds_are_flagged_as_overwrites() {
    let mut model = narrow_model();
    let trace = vec![
        StepInput {
            window: vec![
                addi(0x10, 5, 1, 0x40),
                chained_load(0x14, OpClass::LoadWord, 5, 8),
            ],
            ready: [true, false],
            reset: false,
        },
        StepInput {
            window: vec![
                addi(0x20, 6, 2, 0x80),
                chained_load(0x24, OpClass::LoadWord, 6, 4),
            ],
            ready: [true, false],
            reset: false,
        },
    ];
    let _ = model.run(&trace);

    let stats = model.stats();
    assert_eq!(stats.stall_holds, 2);
    assert_eq!(stats.stall_overwrites, 1);
}

#[test]
fn reset_clears_the_hold_before_the_step_evaluates() {
    let mut model = narrow_model();
    let _ = model.step(&StepInput {
        window: vec![
            addi(0x10, 5, 1, 0x40),
            chained_load(0x14, OpClass::LoadWord, 5, 8),
        ],
        ready: [true, false],
        reset: false,
    });

    // Same head PC as the hold, but reset is asserted: no replay happens.
    let out = model.step(&StepInput {
        window: vec![other(0x10), other(0x18)],
        ready: [true, true],
        reset: true,
    });
    match out {
        ModelOutput::Narrow(out) => {
            assert_eq!(out.slots[0], other(0x10));
            assert!(out.first_valid);
        }
        ModelOutput::Wide(_) => panic!("narrow model produced a wide output"),
    }
    assert_eq!(model.stats().resets, 1);
    assert_eq!(model.stats().stall_replays, 0);
}

#[test]
fn under_filled_window_pads_invalid_and_passes_through() {
    let mut model = narrow_model();
    let lone = addi(0x10, 5, 1, 0x40);
    let out = model.step(&StepInput::new(vec![lone.clone()]));
    match out {
        ModelOutput::Narrow(out) => {
            assert_eq!(out.slots[0], lone);
            assert!(!out.slots[1].valid);
            assert!(out.first_valid);
        }
        ModelOutput::Wide(_) => panic!("narrow model produced a wide output"),
    }
}

#[test]
fn wide_model_arbitrates_earliest_pair_first() {
    let mut model = wide_model();
    let window = vec![
        addi(0x10, 5, 1, 0x40),
        chained_addi(0x14, 5, 8),
        chained_load(0x18, OpClass::LoadWord, 5, 4),
    ];
    let out = model.step(&StepInput::new(window.clone()));
    match out {
        ModelOutput::Wide(out) => {
            assert_eq!(out.fused_slot, Some(FusionSlot::Slot0));
            assert_eq!(out.slots[0], fuse(&window[0], &window[1]));
            assert_eq!(out.slots[1], window[2]);
            assert!(out.ready);
        }
        ModelOutput::Narrow(_) => panic!("wide model produced a narrow output"),
    }
    assert_eq!(model.stats().fused_add_add, 1);
}

#[test]
fn disabled_patterns_replay_as_pure_pass_through() {
    let config = Config::from_json(
        r#"{ "fusion": { "enable_add_load": false, "enable_add_add": false } }"#,
    )
    .expect("valid config");
    let mut model = FusionModel::new(config).expect("config is scannable");

    let trace = vec![StepInput::new(vec![
        addi(0x10, 5, 1, 0x40),
        chained_load(0x14, OpClass::LoadWord, 5, 8),
    ])];
    let _ = model.run(&trace);

    assert_eq!(model.stats().fused_total(), 0);
    assert_eq!(model.stats().pass_throughs, 1);
}
