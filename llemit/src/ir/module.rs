//! Modules
//!
//! An ordered collection of top-level entities. Items are emitted in the
//! order they were added.

use serde::{Deserialize, Serialize};
use crate::ir::{ExternalFunction, Function, GlobalVariable};

/// One top-level entity of a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModuleItem {
    Global(GlobalVariable),
    Declaration(ExternalFunction),
    Function(Function),
}

impl ModuleItem {
    /// Symbol name of the item, without the `@` sigil
    pub fn name(&self) -> &str {
        match self {
            ModuleItem::Global(global) => &global.name,
            ModuleItem::Declaration(decl) => &decl.name,
            ModuleItem::Function(function) => &function.name,
        }
    }
}

/// IR Module - a complete `.ll` translation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Written as the `; ModuleID` header comment
    pub name: Option<String>,
    pub source_filename: Option<String>,
    pub target_triple: Option<String>,
    #[serde(default)]
    pub items: Vec<ModuleItem>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_source_filename(mut self, filename: impl Into<String>) -> Self {
        self.source_filename = Some(filename.into());
        self
    }

    pub fn with_target_triple(mut self, triple: impl Into<String>) -> Self {
        self.target_triple = Some(triple.into());
        self
    }

    pub fn add_global(&mut self, global: GlobalVariable) {
        self.items.push(ModuleItem::Global(global));
    }

    pub fn add_declaration(&mut self, decl: ExternalFunction) {
        self.items.push(ModuleItem::Declaration(decl));
    }

    pub fn add_function(&mut self, function: Function) {
        self.items.push(ModuleItem::Function(function));
    }

    pub fn with_global(mut self, global: GlobalVariable) -> Self {
        self.add_global(global);
        self
    }

    pub fn with_declaration(mut self, decl: ExternalFunction) -> Self {
        self.add_declaration(decl);
        self
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.add_function(function);
        self
    }

    pub fn globals(&self) -> impl Iterator<Item = &GlobalVariable> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Global(global) => Some(global),
            _ => None,
        })
    }

    pub fn declarations(&self) -> impl Iterator<Item = &ExternalFunction> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Declaration(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions().find(|f| f.name == name)
    }

    pub fn get_global(&self, name: &str) -> Option<&GlobalVariable> {
        self.globals().find(|g| g.name == name)
    }
}
