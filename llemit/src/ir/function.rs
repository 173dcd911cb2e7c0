//! Function Definitions and Declarations

use serde::{Deserialize, Serialize};
use crate::ir::{BasicBlock, CallingConvention, DllStorageClass, Linkage, PreemptionSpecifier, Type, Visibility};

/// Formal parameter; unnamed parameters render as their type alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub ty: Type,
    pub name: Option<String>,
}

impl FunctionParameter {
    pub fn new(ty: Type) -> Self {
        Self { ty, name: None }
    }

    pub fn named(ty: Type, name: impl Into<String>) -> Self {
        Self { ty, name: Some(name.into()) }
    }
}

impl From<Type> for FunctionParameter {
    fn from(ty: Type) -> Self {
        FunctionParameter::new(ty)
    }
}

/// Function definition with a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub linkage: Option<Linkage>,
    pub preemption_specifier: Option<PreemptionSpecifier>,
    pub visibility: Option<Visibility>,
    pub dll_storage_class: Option<DllStorageClass>,
    pub calling_convention: Option<CallingConvention>,

    pub return_type: Type,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,

    #[serde(default)]
    pub unnamed_addr: bool,
    #[serde(default)]
    pub local_unnamed_addr: bool,
    pub addr_space: Option<u32>,
    pub section: Option<String>,
    pub partition: Option<String>,
    pub alignment: Option<u64>,

    #[serde(default)]
    pub body: Vec<BasicBlock>,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            linkage: None,
            preemption_specifier: None,
            visibility: None,
            dll_storage_class: None,
            calling_convention: None,
            return_type,
            name: name.into(),
            parameters: Vec::new(),
            unnamed_addr: false,
            local_unnamed_addr: false,
            addr_space: None,
            section: None,
            partition: None,
            alignment: None,
            body: Vec::new(),
        }
    }

    pub fn add_parameter(&mut self, parameter: impl Into<FunctionParameter>) {
        self.parameters.push(parameter.into());
    }

    pub fn add_block(&mut self, block: BasicBlock) {
        self.body.push(block);
    }

    pub fn with_parameter(mut self, parameter: impl Into<FunctionParameter>) -> Self {
        self.add_parameter(parameter);
        self
    }

    pub fn with_block(mut self, block: BasicBlock) -> Self {
        self.add_block(block);
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

    pub fn with_calling_convention(mut self, cc: CallingConvention) -> Self {
        self.calling_convention = Some(cc);
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

    pub fn get_block(&self, name: &str) -> Option<&BasicBlock> {
        self.body.iter().find(|b| b.name == name)
    }

    pub fn get_block_mut(&mut self, name: &str) -> Option<&mut BasicBlock> {
        self.body.iter_mut().find(|b| b.name == name)
    }

    pub fn entry_block(&self) -> Option<&BasicBlock> {
        self.body.first()
    }
}

/// External function declaration (`declare`), never has a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFunction {
    pub linkage: Option<Linkage>,
    pub visibility: Option<Visibility>,
    pub dll_storage_class: Option<DllStorageClass>,
    pub calling_convention: Option<CallingConvention>,

    pub return_type: Type,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,

    #[serde(default)]
    pub unnamed_addr: bool,
    #[serde(default)]
    pub local_unnamed_addr: bool,
    pub alignment: Option<u64>,
}

impl ExternalFunction {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            linkage: None,
            visibility: None,
            dll_storage_class: None,
            calling_convention: None,
            return_type,
            name: name.into(),
            parameters: Vec::new(),
            unnamed_addr: false,
            local_unnamed_addr: false,
            alignment: None,
        }
    }

    pub fn add_parameter(&mut self, parameter: impl Into<FunctionParameter>) {
        self.parameters.push(parameter.into());
    }

    pub fn with_parameter(mut self, parameter: impl Into<FunctionParameter>) -> Self {
        self.add_parameter(parameter);
        self
    }

    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = Some(linkage);
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

    pub fn with_calling_convention(mut self, cc: CallingConvention) -> Self {
        self.calling_convention = Some(cc);
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

    pub fn with_alignment(mut self, alignment: u64) -> Self {
        self.alignment = Some(alignment);
        self
    }
}
