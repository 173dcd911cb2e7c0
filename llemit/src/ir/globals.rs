//! Global Variables

use serde::{Deserialize, Serialize};
use crate::ir::{CodeModel, Constant, DllStorageClass, Linkage, PreemptionSpecifier, ThreadLocal, Type, Visibility};

/// Module-level variable or constant.
///
/// `name`, `ty` and `initializer` are required and passed to
/// [`GlobalVariable::new`]; every other field is optional and only shows up
/// in the output when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub name: String,
    pub linkage: Option<Linkage>,
    pub preemption_specifier: Option<PreemptionSpecifier>,
    pub visibility: Option<Visibility>,
    pub dll_storage_class: Option<DllStorageClass>,
    pub thread_local: Option<ThreadLocal>,
    #[serde(default)]
    pub unnamed_addr: bool,
    #[serde(default)]
    pub local_unnamed_addr: bool,
    pub addr_space: Option<u32>,
    #[serde(default)]
    pub externally_initialized: bool,
    /// `global` when true, `constant` otherwise
    #[serde(default)]
    pub global: bool,
    pub ty: Type,
    pub initializer: Constant,

    pub section: Option<String>,
    pub partition: Option<String>,
    pub alignment: Option<u64>,
    pub code_model: Option<CodeModel>,
    #[serde(default)]
    pub no_sanitize_address: bool,
    #[serde(default)]
    pub no_sanitize_hwaddress: bool,
    #[serde(default)]
    pub sanitize_address_dyninit: bool,
    #[serde(default)]
    pub sanitize_memtag: bool,
}

impl GlobalVariable {
    /// Immutable global (`constant`) with no optional attributes
    pub fn new(name: impl Into<String>, ty: Type, initializer: Constant) -> Self {
        Self {
            name: name.into(),
            linkage: None,
            preemption_specifier: None,
            visibility: None,
            dll_storage_class: None,
            thread_local: None,
            unnamed_addr: false,
            local_unnamed_addr: false,
            addr_space: None,
            externally_initialized: false,
            global: false,
            ty,
            initializer,
            section: None,
            partition: None,
            alignment: None,
            code_model: None,
            no_sanitize_address: false,
            no_sanitize_hwaddress: false,
            sanitize_address_dyninit: false,
            sanitize_memtag: false,
        }
    }

    /// Make the variable mutable (`global` instead of `constant`)
    pub fn mutable(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = Some(linkage);
        self
    }

    pub fn with_preemption_specifier(mut self, specifier: PreemptionSpecifier) -> Self {
        self.preemption_specifier = Some(specifier);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_dll_storage_class(mut self, class: DllStorageClass) -> Self {
        self.dll_storage_class = Some(class);
        self
    }

    pub fn with_thread_local(mut self, mode: ThreadLocal) -> Self {
        self.thread_local = Some(mode);
        self
    }

    pub fn with_unnamed_addr(mut self) -> Self {
        self.unnamed_addr = true;
        self
    }

    pub fn with_local_unnamed_addr(mut self) -> Self {
        self.local_unnamed_addr = true;
        self
    }

    pub fn with_addr_space(mut self, addr_space: u32) -> Self {
        self.addr_space = Some(addr_space);
        self
    }

    pub fn with_externally_initialized(mut self) -> Self {
        self.externally_initialized = true;
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    pub fn with_alignment(mut self, alignment: u64) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_code_model(mut self, model: CodeModel) -> Self {
        self.code_model = Some(model);
        self
    }

    pub fn with_no_sanitize_address(mut self) -> Self {
        self.no_sanitize_address = true;
        self
    }

    pub fn with_no_sanitize_hwaddress(mut self) -> Self {
        self.no_sanitize_hwaddress = true;
        self
    }

    pub fn with_sanitize_address_dyninit(mut self) -> Self {
        self.sanitize_address_dyninit = true;
        self
    }

    pub fn with_sanitize_memtag(mut self) -> Self {
        self.sanitize_memtag = true;
        self
    }
}
