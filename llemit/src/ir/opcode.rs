//! IR Opcodes
//!
//! Every instruction opcode of the LLVM language reference. Only a handful
//! carry operand payloads in this model; see [`Opcode::is_implemented`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // Terminators
    Ret, Br, Switch, IndirectBr, Invoke, CallBr, Resume, CatchSwitch, CatchRet, CleanupRet, Unreachable,

    // Unary
    FNeg,

    // Binary
    Add, FAdd, Sub, FSub, Mul, FMul, UDiv, SDiv, FDiv, URem, SRem, FRem,

    // Bitwise binary
    Shl, LShr, AShr, And, Or, Xor,

    // Vector
    ExtractElement, InsertElement, ShuffleVector,

    // Aggregate
    ExtractValue, InsertValue,

    // Memory access and addressing
    Alloca, Load, Store, Fence, CmpXchg, AtomicRmw, GetElementPtr,

    // Conversion
    Trunc, ZExt, SExt, FpTrunc, FpExt, FpToUi, FpToSi, UiToFp, SiToFp, PtrToInt, IntToPtr, BitCast, AddrSpaceCast,

    // Other
    ICmp, FCmp, Phi, Select, Freeze, Call, VaArg, LandingPad, CatchPad, CleanupPad,
}

impl Opcode {
    /// Opcodes the generator can render
    pub const IMPLEMENTED: [Opcode; 6] = [
        Opcode::Ret,
        Opcode::Alloca,
        Opcode::Load,
        Opcode::Store,
        Opcode::GetElementPtr,
        Opcode::Call,
    ];

    pub fn is_implemented(self) -> bool {
        Self::IMPLEMENTED.contains(&self)
    }

    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            Opcode::Ret
                | Opcode::Br
                | Opcode::Switch
                | Opcode::IndirectBr
                | Opcode::Invoke
                | Opcode::CallBr
                | Opcode::Resume
                | Opcode::CatchSwitch
                | Opcode::CatchRet
                | Opcode::CleanupRet
                | Opcode::Unreachable
        )
    }

    /// Mnemonic as spelled in `.ll` files
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Ret => "ret",
            Opcode::Br => "br",
            Opcode::Switch => "switch",
            Opcode::IndirectBr => "indirectbr",
            Opcode::Invoke => "invoke",
            Opcode::CallBr => "callbr",
            Opcode::Resume => "resume",
            Opcode::CatchSwitch => "catchswitch",
            Opcode::CatchRet => "catchret",
            Opcode::CleanupRet => "cleanupret",
            Opcode::Unreachable => "unreachable",
            Opcode::FNeg => "fneg",
            Opcode::Add => "add",
            Opcode::FAdd => "fadd",
            Opcode::Sub => "sub",
            Opcode::FSub => "fsub",
            Opcode::Mul => "mul",
            Opcode::FMul => "fmul",
            Opcode::UDiv => "udiv",
            Opcode::SDiv => "sdiv",
            Opcode::FDiv => "fdiv",
            Opcode::URem => "urem",
            Opcode::SRem => "srem",
            Opcode::FRem => "frem",
            Opcode::Shl => "shl",
            Opcode::LShr => "lshr",
            Opcode::AShr => "ashr",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::ExtractElement => "extractelement",
            Opcode::InsertElement => "insertelement",
            Opcode::ShuffleVector => "shufflevector",
            Opcode::ExtractValue => "extractvalue",
            Opcode::InsertValue => "insertvalue",
            Opcode::Alloca => "alloca",
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::Fence => "fence",
            Opcode::CmpXchg => "cmpxchg",
            Opcode::AtomicRmw => "atomicrmw",
            Opcode::GetElementPtr => "getelementptr",
            Opcode::Trunc => "trunc",
            Opcode::ZExt => "zext",
            Opcode::SExt => "sext",
            Opcode::FpTrunc => "fptrunc",
            Opcode::FpExt => "fpext",
            Opcode::FpToUi => "fptoui",
            Opcode::FpToSi => "fptosi",
            Opcode::UiToFp => "uitofp",
            Opcode::SiToFp => "sitofp",
            Opcode::PtrToInt => "ptrtoint",
            Opcode::IntToPtr => "inttoptr",
            Opcode::BitCast => "bitcast",
            Opcode::AddrSpaceCast => "addrspacecast",
            Opcode::ICmp => "icmp",
            Opcode::FCmp => "fcmp",
            Opcode::Phi => "phi",
            Opcode::Select => "select",
            Opcode::Freeze => "freeze",
            Opcode::Call => "call",
            Opcode::VaArg => "va_arg",
            Opcode::LandingPad => "landingpad",
            Opcode::CatchPad => "catchpad",
            Opcode::CleanupPad => "cleanuppad",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
