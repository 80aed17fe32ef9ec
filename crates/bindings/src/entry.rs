//! Decode-window record Python binding.
//!
//! Exposes `DecodeEntry` so Python models can assemble decode windows:
//! constructor with keyword defaults, getters/setters for every field, and
//! trap management by fault name.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rvfuse_core::common::error::Trap;
use rvfuse_core::core::pipeline::latches::DecodeEntry;
use rvfuse_core::core::pipeline::signals::OpClass;

/// Parses an instruction-class name as used in the Python API.
fn op_class_from_name(name: &str) -> PyResult<OpClass> {
    Ok(match name {
        "Add" => OpClass::Add,
        "AddWide" => OpClass::AddWide,
        "LoadByte" => OpClass::LoadByte,
        "LoadByteU" => OpClass::LoadByteU,
        "LoadHalf" => OpClass::LoadHalf,
        "LoadHalfU" => OpClass::LoadHalfU,
        "LoadWord" => OpClass::LoadWord,
        "LoadWordU" => OpClass::LoadWordU,
        "LoadDouble" => OpClass::LoadDouble,
        "Other" => OpClass::Other,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown instruction class: {other}"
            )));
        }
    })
}

/// Name of an instruction class as used in the Python API.
const fn op_class_name(op_class: OpClass) -> &'static str {
    match op_class {
        OpClass::Add => "Add",
        OpClass::AddWide => "AddWide",
        OpClass::LoadByte => "LoadByte",
        OpClass::LoadByteU => "LoadByteU",
        OpClass::LoadHalf => "LoadHalf",
        OpClass::LoadHalfU => "LoadHalfU",
        OpClass::LoadWord => "LoadWord",
        OpClass::LoadWordU => "LoadWordU",
        OpClass::LoadDouble => "LoadDouble",
        OpClass::Other => "Other",
    }
}

/// Python-exposed decode record: wraps `DecodeEntry` for window assembly
/// from Python.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PyDecodeEntry {
    /// The wrapped record.
    pub inner: DecodeEntry,
}

#[pymethods]
impl PyDecodeEntry {
    /// Creates a record; unspecified fields take the pass-through defaults,
    /// except `valid`, which defaults to true for convenience.
    #[new]
    #[pyo3(signature = (
        pc = 0,
        op_class = "Other",
        rd = 0,
        rs1 = 0,
        rs2 = 0,
        use_imm = false,
        use_pc = false,
        is_compressed = false,
        result = 0,
        valid = true
    ))]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    fn new(
        pc: u64,
        op_class: &str,
        rd: usize,
        rs1: usize,
        rs2: usize,
        use_imm: bool,
        use_pc: bool,
        is_compressed: bool,
        result: i64,
        valid: bool,
    ) -> PyResult<Self> {
        Ok(Self {
            inner: DecodeEntry {
                pc,
                op_class: op_class_from_name(op_class)?,
                rd,
                rs1,
                rs2,
                use_imm,
                use_pc,
                is_compressed,
                result,
                valid,
                ..DecodeEntry::default()
            },
        })
    }

    #[getter]
    fn pc(&self) -> u64 {
        self.inner.pc
    }

    #[setter]
    fn set_pc(&mut self, pc: u64) {
        self.inner.pc = pc;
    }

    #[getter]
    fn op_class(&self) -> &'static str {
        op_class_name(self.inner.op_class)
    }

    #[setter]
    fn set_op_class(&mut self, name: &str) -> PyResult<()> {
        self.inner.op_class = op_class_from_name(name)?;
        Ok(())
    }

    #[getter]
    fn rd(&self) -> usize {
        self.inner.rd
    }

    #[setter]
    fn set_rd(&mut self, rd: usize) {
        self.inner.rd = rd;
    }

    #[getter]
    fn rs1(&self) -> usize {
        self.inner.rs1
    }

    #[setter]
    fn set_rs1(&mut self, rs1: usize) {
        self.inner.rs1 = rs1;
    }

    #[getter]
    fn rs2(&self) -> usize {
        self.inner.rs2
    }

    #[setter]
    fn set_rs2(&mut self, rs2: usize) {
        self.inner.rs2 = rs2;
    }

    #[getter]
    fn use_imm(&self) -> bool {
        self.inner.use_imm
    }

    #[setter]
    fn set_use_imm(&mut self, use_imm: bool) {
        self.inner.use_imm = use_imm;
    }

    #[getter]
    fn use_pc(&self) -> bool {
        self.inner.use_pc
    }

    #[setter]
    fn set_use_pc(&mut self, use_pc: bool) {
        self.inner.use_pc = use_pc;
    }

    #[getter]
    fn is_compressed(&self) -> bool {
        self.inner.is_compressed
    }

    #[setter]
    fn set_is_compressed(&mut self, is_compressed: bool) {
        self.inner.is_compressed = is_compressed;
    }

    /// 2-bit compression-provenance code: 0 = not a fusion result.
    #[getter]
    fn fusion(&self) -> u8 {
        self.inner.fusion.code()
    }

    #[getter]
    fn result(&self) -> i64 {
        self.inner.result
    }

    #[setter]
    fn set_result(&mut self, result: i64) {
        self.inner.result = result;
    }

    #[getter]
    fn valid(&self) -> bool {
        self.inner.valid
    }

    #[setter]
    fn set_valid(&mut self, valid: bool) {
        self.inner.valid = valid;
    }

    /// Whether the record already carries a fault.
    #[getter]
    fn exception_pending(&self) -> bool {
        self.inner.trap.is_some()
    }

    /// Attaches a pending fault by name: `"access"`, `"illegal"`,
    /// `"breakpoint"`, or `"page"`.
    fn set_trap(&mut self, kind: &str, value: u64) -> PyResult<()> {
        self.inner.trap = Some(match kind {
            "access" => Trap::InstructionAccessFault(value),
            "illegal" => Trap::IllegalInstruction(value as u32),
            "breakpoint" => Trap::Breakpoint(value),
            "page" => Trap::InstructionPageFault(value),
            other => return Err(PyValueError::new_err(format!("unknown trap kind: {other}"))),
        });
        Ok(())
    }

    /// Removes any pending fault.
    fn clear_trap(&mut self) {
        self.inner.trap = None;
    }

    fn __repr__(&self) -> String {
        format!(
            "DecodeEntry(pc={:#x}, op_class={}, rd={}, rs1={}, rs2={}, fusion={}, valid={})",
            self.inner.pc,
            op_class_name(self.inner.op_class),
            self.inner.rd,
            self.inner.rs1,
            self.inner.rs2,
            self.inner.fusion.code(),
            self.inner.valid,
        )
    }
}

impl From<DecodeEntry> for PyDecodeEntry {
    fn from(inner: DecodeEntry) -> Self {
        Self { inner }
    }
}
