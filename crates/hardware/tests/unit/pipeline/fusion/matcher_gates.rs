//! Matcher gates: the register-chain invariant, fail-open conditions, the
//! pattern table, and wide-window arbitration order.

use rstest::rstest;
use rvfuse_core::common::error::Trap;
use rvfuse_core::core::pipeline::fusion::{FusionDecision, FusionPolicy, match_window2, match_window3};
use rvfuse_core::core::pipeline::signals::OpClass;

use crate::common::builders::{EntryBuilder, addi, chained_addi, chained_load, other};

#[test]
fn chain_through_rd_matches_add_load() {
    let window = [
        addi(0x10, 5, 1, 0x40),
        chained_load(0x14, OpClass::LoadWord, 5, 8),
    ];
    assert_eq!(
        match_window2(&window, &FusionPolicy::default()),
        FusionDecision::AddLoad {
            producer: 0,
            consumer: 1
        }
    );
}

#[rstest]
#[case(OpClass::LoadByte)]
#[case(OpClass::LoadByteU)]
#[case(OpClass::LoadHalf)]
#[case(OpClass::LoadHalfU)]
#[case(OpClass::LoadWord)]
#[case(OpClass::LoadWordU)]
#[case(OpClass::LoadDouble)]
fn every_load_width_is_a_consumer(#[case] load: OpClass) {
    let window = [addi(0x10, 5, 1, 0x40), chained_load(0x14, load, 5, 8)];
    assert!(!match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn wide_add_producer_matches() {
    let mut producer = addi(0x10, 5, 1, 0x40);
    producer.op_class = OpClass::AddWide;
    let window = [producer, chained_load(0x14, OpClass::LoadWord, 5, 8)];
    assert!(!match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn immediate_adds_match_add_add() {
    let window = [addi(0x10, 5, 1, 0x40), chained_addi(0x14, 5, 8)];
    assert_eq!(
        match_window2(&window, &FusionPolicy::default()),
        FusionDecision::AddAdd {
            producer: 0,
            consumer: 1
        }
    );
}

#[test]
fn add_add_requires_both_immediates() {
    let mut consumer = chained_addi(0x14, 5, 8);
    consumer.use_imm = false;
    let window = [addi(0x10, 5, 1, 0x40), consumer];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());

    let mut producer = addi(0x10, 5, 1, 0x40);
    producer.use_imm = false;
    let window = [producer, chained_addi(0x14, 5, 8)];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn pc_relative_consumer_blocks_add_add() {
    let mut consumer = chained_addi(0x14, 5, 8);
    consumer.use_pc = true;
    let window = [addi(0x10, 5, 1, 0x40), consumer];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn pc_relative_producer_still_matches() {
    let mut producer = addi(0x10, 5, 1, 0x40);
    producer.use_pc = true;
    let window = [producer, chained_load(0x14, OpClass::LoadWord, 5, 8)];
    assert!(!match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn broken_chain_register_never_matches() {
    // Consumer base register differs from the producer destination.
    let mut consumer = chained_load(0x14, OpClass::LoadWord, 5, 8);
    consumer.rs1 = 6;
    let window = [addi(0x10, 5, 1, 0x40), consumer];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());

    // Consumer destination differs from the producer destination.
    let mut consumer = chained_load(0x14, OpClass::LoadWord, 5, 8);
    consumer.rd = 6;
    let window = [addi(0x10, 5, 1, 0x40), consumer];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn non_add_producer_never_matches() {
    let producer = chained_load(0x10, OpClass::LoadWord, 5, 0x40);
    let consumer = chained_load(0x14, OpClass::LoadWord, 5, 8);
    assert!(match_window2(&[producer, consumer], &FusionPolicy::default()).is_none());
}

#[test]
fn pending_trap_fails_open() {
    let trapped = EntryBuilder::new(OpClass::Add)
        .pc(0x10)
        .rd(5)
        .rs1(1)
        .imm(0x40)
        .trap(Trap::IllegalInstruction(0))
        .build();
    let window = [trapped, chained_load(0x14, OpClass::LoadWord, 5, 8)];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());

    let window = [
        addi(0x10, 5, 1, 0x40),
        EntryBuilder::new(OpClass::LoadWord)
            .pc(0x14)
            .rd(5)
            .rs1(5)
            .imm(8)
            .trap(Trap::InstructionAccessFault(0x14))
            .build(),
    ];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn invalid_slot_fails_open() {
    let mut producer = addi(0x10, 5, 1, 0x40);
    producer.valid = false;
    let window = [producer, chained_load(0x14, OpClass::LoadWord, 5, 8)];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());

    let mut consumer = chained_load(0x14, OpClass::LoadWord, 5, 8);
    consumer.valid = false;
    let window = [addi(0x10, 5, 1, 0x40), consumer];
    assert!(match_window2(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn disabled_pattern_never_matches() {
    let no_loads = FusionPolicy {
        allow_add_load: false,
        allow_add_add: true,
    };
    let window = [
        addi(0x10, 5, 1, 0x40),
        chained_load(0x14, OpClass::LoadWord, 5, 8),
    ];
    assert!(match_window2(&window, &no_loads).is_none());

    let no_adds = FusionPolicy {
        allow_add_load: true,
        allow_add_add: false,
    };
    let window = [addi(0x10, 5, 1, 0x40), chained_addi(0x14, 5, 8)];
    assert!(match_window2(&window, &no_adds).is_none());
}

// ── Wide-window arbitration ──────────────────────────────────────────

#[test]
fn earliest_pair_wins_when_both_match() {
    let window = [
        addi(0x10, 5, 1, 0x40),
        chained_addi(0x14, 5, 8),
        chained_load(0x18, OpClass::LoadWord, 5, 4),
    ];
    // (0,1) and (1,2) both satisfy the table; (0,1) must win.
    assert_eq!(
        match_window3(&window, &FusionPolicy::default()),
        FusionDecision::AddAdd {
            producer: 0,
            consumer: 1
        }
    );
}

#[test]
fn second_pair_considered_only_when_first_fails() {
    let window = [
        other(0x0c),
        addi(0x10, 5, 1, 0x40),
        chained_load(0x14, OpClass::LoadWord, 5, 8),
    ];
    assert_eq!(
        match_window3(&window, &FusionPolicy::default()),
        FusionDecision::AddLoad {
            producer: 1,
            consumer: 2
        }
    );
}

#[test]
fn second_pair_needs_a_valid_head_slot() {
    let window = [
        EntryBuilder::new(OpClass::Other).pc(0x0c).invalid().build(),
        addi(0x10, 5, 1, 0x40),
        chained_load(0x14, OpClass::LoadWord, 5, 8),
    ];
    // Slot 0 cannot be safely routed as the unfused output.
    assert!(match_window3(&window, &FusionPolicy::default()).is_none());
}

#[test]
fn second_pair_needs_a_valid_tail_slot() {
    let mut tail = chained_load(0x14, OpClass::LoadWord, 5, 8);
    tail.valid = false;
    let window = [other(0x0c), addi(0x10, 5, 1, 0x40), tail];
    assert!(match_window3(&window, &FusionPolicy::default()).is_none());
}
