//! Attribute keywords
//!
//! Every attribute enum maps each variant to a single fixed keyword.
//! Visibility and preemption specifiers have no spelling yet and render
//! as the empty string; callers skip empty keywords entirely.

use std::fmt;
use crate::ir::{
    CallingConvention, CodeModel, DllStorageClass, Linkage,
    PreemptionSpecifier, TailCall, ThreadLocal, Visibility,
};

impl Linkage {
    pub fn keyword(self) -> &'static str {
        match self {
            Linkage::Private => "private",
            Linkage::Internal => "internal",
            Linkage::AvailableExternally => "available_externally",
            Linkage::Linkonce => "linkonce",
            Linkage::Weak => "weak",
            Linkage::Common => "common",
            Linkage::Appending => "appending",
            Linkage::ExternWeak => "extern_weak",
            Linkage::LinkonceOdr => "linkonce_odr",
            Linkage::WeakOdr => "weak_odr",
            Linkage::External => "external",
        }
    }
}

impl PreemptionSpecifier {
    pub fn keyword(self) -> &'static str {
        ""
    }
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        ""
    }
}

impl DllStorageClass {
    pub fn keyword(self) -> &'static str {
        match self {
            DllStorageClass::DllImport => "dllimport",
            DllStorageClass::DllExport => "dllexport",
        }
    }
}

impl ThreadLocal {
    /// The TLS model alone, without the `thread_local(...)` wrapper
    pub fn mode(self) -> &'static str {
        match self {
            ThreadLocal::LocalDynamic => "localdynamic",
            ThreadLocal::InitialExec => "initialexec",
            ThreadLocal::LocalExec => "localexec",
        }
    }
}

impl CodeModel {
    pub fn keyword(self) -> &'static str {
        match self {
            CodeModel::Tiny => "tiny",
            CodeModel::Small => "small",
            CodeModel::Kernel => "kernel",
            CodeModel::Medium => "medium",
            CodeModel::Large => "large",
        }
    }
}

impl CallingConvention {
    pub fn keyword(self) -> &'static str {
        match self {
            CallingConvention::C => "c",
            CallingConvention::Fast => "fast",
            CallingConvention::Cold => "cold",
            CallingConvention::Ghc => "ghc",
            CallingConvention::Cc11 => "cc11",
            CallingConvention::AnyReg => "anyreg",
            CallingConvention::PreserveMost => "preservemost",
            CallingConvention::PreserveAll => "preserveall",
            CallingConvention::CxxFastTls => "cxxfasttls",
            CallingConvention::Tail => "tail",
            CallingConvention::Swift => "swift",
            CallingConvention::SwiftTail => "swifttail",
            CallingConvention::CfGuardCheck => "cfguardcheck",
        }
    }
}

impl TailCall {
    pub fn keyword(self) -> &'static str {
        match self {
            TailCall::Tail => "tail",
            TailCall::MustTail => "musttail",
            TailCall::NoTail => "notail",
        }
    }
}

macro_rules! display_keyword {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.keyword())
                }
            }
        )*
    };
}

display_keyword!(
    Linkage,
    PreemptionSpecifier,
    Visibility,
    DllStorageClass,
    CodeModel,
    CallingConvention,
    TailCall,
);

impl fmt::Display for ThreadLocal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread_local({})", self.mode())
    }
}
