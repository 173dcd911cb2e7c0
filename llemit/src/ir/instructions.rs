//! IR Instructions
//!
//! Each supported opcode has its own operand struct; [`InstructionKind`]
//! holds exactly one of them, so an opcode can never be paired with the
//! wrong operands.

use serde::{Deserialize, Serialize};
use crate::ir::{CallingConvention, Constant, Opcode, TailCall, Type};

/// `ret <type> [<value>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ret {
    pub ty: Type,
    pub value: Option<Constant>,
}

impl Ret {
    pub fn new(ty: Type, value: Constant) -> Self {
        Self { ty, value: Some(value) }
    }

    /// Return without a value operand, as used by `void` functions
    pub fn bare(ty: Type) -> Self {
        Self { ty, value: None }
    }
}

fn one() -> u64 {
    1
}

/// Stack allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alloca {
    #[serde(default)]
    pub inalloca: bool,
    pub ty: Type,
    /// Number of elements; the count clause is only emitted above one
    #[serde(default = "one")]
    pub elements: u64,
    pub alignment: Option<u64>,
    pub addrspace: Option<u32>,
}

impl Alloca {
    pub fn new(ty: Type) -> Self {
        Self {
            inalloca: false,
            ty,
            elements: 1,
            alignment: None,
            addrspace: None,
        }
    }

    pub fn with_inalloca(mut self) -> Self {
        self.inalloca = true;
        self
    }

    pub fn with_elements(mut self, elements: u64) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_alignment(mut self, alignment: u64) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_addrspace(mut self, addrspace: u32) -> Self {
        self.addrspace = Some(addrspace);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    #[serde(default)]
    pub volatile: bool,
    pub value_type: Type,
    pub pointer_type: Type,
    pub pointer: Constant,
    pub alignment: Option<u64>,
}

impl Load {
    pub fn new(value_type: Type, pointer_type: Type, pointer: Constant) -> Self {
        Self {
            volatile: false,
            value_type,
            pointer_type,
            pointer,
            alignment: None,
        }
    }

    pub fn with_volatile(mut self) -> Self {
        self.volatile = true;
        self
    }

    pub fn with_alignment(mut self, alignment: u64) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub volatile: bool,
    pub value_type: Type,
    pub value: Constant,
    pub pointer_type: Type,
    pub pointer: Constant,
    pub alignment: Option<u64>,
}

impl Store {
    pub fn new(value_type: Type, value: Constant, pointer_type: Type, pointer: Constant) -> Self {
        Self {
            volatile: false,
            value_type,
            value,
            pointer_type,
            pointer,
            alignment: None,
        }
    }

    pub fn with_volatile(mut self) -> Self {
        self.volatile = true;
        self
    }

    pub fn with_alignment(mut self, alignment: u64) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// One `<type> <value>` index operand of a GEP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GepIndex {
    pub ty: Type,
    pub value: Constant,
}

/// Address computation: `getelementptr [inbounds] <ty>, <ptr-ty> <ptr>{, <idx-ty> <idx>}*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetElementPtr {
    #[serde(default)]
    pub inbounds: bool,
    pub ty: Type,
    pub pointer_type: Type,
    pub pointer: Constant,
    #[serde(default)]
    pub indices: Vec<GepIndex>,
}

impl GetElementPtr {
    /// GEP with no indices; add them with [`GetElementPtr::with_index`]
    pub fn new(ty: Type, pointer_type: Type, pointer: Constant) -> Self {
        Self {
            inbounds: false,
            ty,
            pointer_type,
            pointer,
            indices: Vec::new(),
        }
    }

    /// Address of the first element of the aggregate behind `pointer`,
    /// indexed by `i32 0, i32 0`
    pub fn first_element(ty: Type, pointer_type: Type, pointer: Constant) -> Self {
        Self::new(ty, pointer_type, pointer)
            .with_index(Type::i32(), Constant::Integer(0))
            .with_index(Type::i32(), Constant::Integer(0))
    }

    pub fn with_index(mut self, ty: Type, value: Constant) -> Self {
        self.indices.push(GepIndex { ty, value });
        self
    }

    pub fn with_inbounds(mut self) -> Self {
        self.inbounds = true;
        self
    }
}

/// One `<type> <value>` call argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub ty: Type,
    pub value: Constant,
}

/// Direct call of a named function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub tail: Option<TailCall>,
    pub calling_convention: Option<CallingConvention>,
    pub addrspace: Option<u32>,
    pub return_type: Type,
    pub callee: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Call {
    pub fn new(return_type: Type, callee: impl Into<String>) -> Self {
        Self {
            tail: None,
            calling_convention: None,
            addrspace: None,
            return_type,
            callee: callee.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, ty: Type, value: Constant) -> Self {
        self.arguments.push(Argument { ty, value });
        self
    }

    pub fn with_tail(mut self, tail: TailCall) -> Self {
        self.tail = Some(tail);
        self
    }

    pub fn with_calling_convention(mut self, cc: CallingConvention) -> Self {
        self.calling_convention = Some(cc);
        self
    }

    pub fn with_addrspace(mut self, addrspace: u32) -> Self {
        self.addrspace = Some(addrspace);
        self
    }
}

/// Operands of an instruction, one variant per supported opcode.
/// `Other` records an opcode that has no operand model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    Ret(Ret),
    Alloca(Alloca),
    Load(Load),
    Store(Store),
    GetElementPtr(GetElementPtr),
    Call(Call),
    Other(Opcode),
}

/// IR Instruction with an optional result name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub name: Option<String>,
    pub kind: InstructionKind,
}

impl Instruction {
    pub fn new(kind: InstructionKind) -> Self {
        Self { name: None, kind }
    }

    /// Bind the result to `%name`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn opcode(&self) -> Opcode {
        match &self.kind {
            InstructionKind::Ret(_) => Opcode::Ret,
            InstructionKind::Alloca(_) => Opcode::Alloca,
            InstructionKind::Load(_) => Opcode::Load,
            InstructionKind::Store(_) => Opcode::Store,
            InstructionKind::GetElementPtr(_) => Opcode::GetElementPtr,
            InstructionKind::Call(_) => Opcode::Call,
            InstructionKind::Other(op) => *op,
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.opcode().is_terminator()
    }
}

impl From<Ret> for Instruction {
    fn from(ret: Ret) -> Self {
        Instruction::new(InstructionKind::Ret(ret))
    }
}

impl From<Alloca> for Instruction {
    fn from(alloca: Alloca) -> Self {
        Instruction::new(InstructionKind::Alloca(alloca))
    }
}

impl From<Load> for Instruction {
    fn from(load: Load) -> Self {
        Instruction::new(InstructionKind::Load(load))
    }
}

impl From<Store> for Instruction {
    fn from(store: Store) -> Self {
        Instruction::new(InstructionKind::Store(store))
    }
}

impl From<GetElementPtr> for Instruction {
    fn from(gep: GetElementPtr) -> Self {
        Instruction::new(InstructionKind::GetElementPtr(gep))
    }
}

impl From<Call> for Instruction {
    fn from(call: Call) -> Self {
        Instruction::new(InstructionKind::Call(call))
    }
}

impl From<Opcode> for Instruction {
    fn from(op: Opcode) -> Self {
        Instruction::new(InstructionKind::Other(op))
    }
}
