//! Symbol Attributes
//!
//! Enumerations attached to globals, functions and calls. Their textual
//! keywords live in `codegen::attributes`.

use serde::{Deserialize, Serialize};

/// Linkage types for global symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Linkage {
    Private,
    Internal,
    AvailableExternally,
    Linkonce,
    Weak,
    Common,
    Appending,
    ExternWeak,
    LinkonceOdr,
    WeakOdr,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreemptionSpecifier {
    DsoPreemptable,
    DsoLocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Default,
    Hidden,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DllStorageClass {
    DllImport,
    DllExport,
}

/// Thread-local storage model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadLocal {
    LocalDynamic,
    InitialExec,
    LocalExec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeModel {
    Tiny,
    Small,
    Kernel,
    Medium,
    Large,
}

/// Calling conventions for functions and call sites.
/// Numbered `cc <n>` conventions are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallingConvention {
    C,
    Fast,
    Cold,
    Ghc,
    Cc11,
    AnyReg,
    PreserveMost,
    PreserveAll,
    CxxFastTls,
    Tail,
    Swift,
    SwiftTail,
    CfGuardCheck,
}

/// Tail call marker on a call instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TailCall {
    Tail,
    MustTail,
    NoTail,
}
