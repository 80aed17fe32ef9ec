//! Tests for shared types: trap formatting and record predicates.

use pretty_assertions::assert_eq;
use rvfuse_core::common::error::Trap;
use rvfuse_core::core::pipeline::latches::DecodeEntry;
use rvfuse_core::core::pipeline::signals::OpClass;

use crate::common::builders::EntryBuilder;

#[test]
fn trap_display_includes_fault_detail() {
    assert_eq!(
        Trap::InstructionAccessFault(0x8000_0000).to_string(),
        "InstructionAccessFault(0x80000000)"
    );
    assert_eq!(
        Trap::IllegalInstruction(0x13).to_string(),
        "IllegalInstruction(0x00000013)"
    );
    assert_eq!(Trap::Breakpoint(0x44).to_string(), "Breakpoint(0x44)");
}

#[test]
fn default_entry_is_not_fusable() {
    // Default records are invalid until the fetch stage says otherwise.
    assert!(!DecodeEntry::default().fusable());
}

#[test]
fn valid_untrapped_entry_is_fusable() {
    let entry = EntryBuilder::new(OpClass::Add).build();
    assert!(entry.fusable());
}

#[test]
fn trap_blocks_fusability() {
    let entry = EntryBuilder::new(OpClass::Add)
        .trap(Trap::Breakpoint(0))
        .build();
    assert!(!entry.fusable());
}
