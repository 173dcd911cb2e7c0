//! Function Builder
//!
//! Stateful helper for filling a function body block by block. Results of
//! value-producing instructions are auto-numbered (`%0`, `%1`, ...) unless
//! the caller names them through [`FunctionBuilder::build_named`].

use log::trace;
use crate::error::BuildError;
use crate::ir::{
    Alloca, BasicBlock, Call, Constant, Function, FunctionParameter,
    GetElementPtr, Instruction, Load, Ret, Store, Type,
};

/// Builder for constructing a [`Function`]
pub struct FunctionBuilder {
    function: Function,
    current_block: Option<usize>,
    unnamed_parameters: u32,
    next_temp_id: u32,
}

/// Implicit number carried by a `%N` name, if it is one
fn temp_number(name: &str) -> Option<u32> {
    if name.starts_with('+') {
        return None;
    }
    name.parse().ok()
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            function: Function::new(name, return_type),
            current_block: None,
            unnamed_parameters: 0,
            next_temp_id: 0,
        }
    }

    /// Start from a function whose signature and attributes are already set.
    ///
    /// Numbering continues after the unnamed parameters and after every
    /// numeric name already present in the function.
    pub fn from_function(function: Function) -> Self {
        let current_block = function.body.len().checked_sub(1);
        let unnamed_parameters = function
            .parameters
            .iter()
            .filter(|parameter| parameter.name.is_none())
            .count() as u32;

        let named_parameters = function.parameters.iter().filter_map(|p| p.name.as_deref());
        let results = function
            .body
            .iter()
            .flat_map(|block| &block.instructions)
            .filter_map(|instr| instr.name.as_deref());
        let next_temp_id = named_parameters
            .chain(results)
            .filter_map(temp_number)
            .map(|n| n + 1)
            .fold(unnamed_parameters, u32::max);

        Self {
            function,
            current_block,
            unnamed_parameters,
            next_temp_id,
        }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Unnamed parameters take the lowest implicit numbers, so they can only
    /// be added before any value has been numbered.
    pub fn add_parameter(&mut self, parameter: impl Into<FunctionParameter>) -> Result<(), BuildError> {
        let parameter = parameter.into();
        if parameter.name.is_none() {
            if self.next_temp_id != self.unnamed_parameters {
                return Err(BuildError::LateUnnamedParameter {
                    function: self.function.name.clone(),
                    next: self.next_temp_id,
                });
            }
            self.unnamed_parameters += 1;
            self.next_temp_id += 1;
        } else if let Some(n) = parameter.name.as_deref().and_then(temp_number) {
            self.next_temp_id = self.next_temp_id.max(n + 1);
        }
        self.function.add_parameter(parameter);
        Ok(())
    }

    pub fn new_temp(&mut self) -> String {
        let temp = self.next_temp_id;
        self.next_temp_id += 1;
        temp.to_string()
    }

    /// Append a new block and make it the insertion point
    pub fn append_block(&mut self, label: impl Into<String>) -> Result<(), BuildError> {
        let label = label.into();
        if self.function.get_block(&label).is_some() {
            return Err(BuildError::DuplicateBlock {
                function: self.function.name.clone(),
                label,
            });
        }
        trace!("@{}: appending block '{}'", self.function.name, label);
        self.function.add_block(BasicBlock::new(label));
        self.current_block = Some(self.function.body.len() - 1);
        Ok(())
    }

    /// Move the insertion point to the end of an existing block
    pub fn position_at_end(&mut self, label: &str) -> Result<(), BuildError> {
        match self.function.body.iter().position(|b| b.name == label) {
            Some(index) => {
                self.current_block = Some(index);
                Ok(())
            }
            None => Err(BuildError::UnknownBlock {
                function: self.function.name.clone(),
                label: label.to_string(),
            }),
        }
    }

    pub fn current_block(&self) -> Option<&BasicBlock> {
        self.current_block.and_then(|index| self.function.body.get(index))
    }

    pub fn current_block_has_terminator(&self) -> bool {
        self.current_block().is_some_and(BasicBlock::has_terminator)
    }

    fn add_instruction(&mut self, instr: Instruction) -> Result<(), BuildError> {
        let function_name = &self.function.name;
        let block = self
            .current_block
            .and_then(|index| self.function.body.get_mut(index))
            .ok_or_else(|| BuildError::NoCurrentBlock {
                function: function_name.clone(),
            })?;
        trace!("@{}/{}: adding {} instruction", function_name, block.name, instr.opcode());
        block.add_instruction(instr);
        Ok(())
    }

    /// Append `instr` with its result bound to `%name`
    pub fn build_named(&mut self, name: impl Into<String>, instr: impl Into<Instruction>) -> Result<Constant, BuildError> {
        let name = name.into();
        self.add_instruction(instr.into().named(name.clone()))?;
        if let Some(n) = temp_number(&name) {
            self.next_temp_id = self.next_temp_id.max(n + 1);
        }
        Ok(Constant::LocalVariable(name))
    }

    fn build_temp(&mut self, instr: Instruction) -> Result<Constant, BuildError> {
        if self.current_block.is_none() {
            return Err(BuildError::NoCurrentBlock {
                function: self.function.name.clone(),
            });
        }
        let name = self.new_temp();
        self.build_named(name, instr)
    }

    pub fn build_alloca(&mut self, alloca: Alloca) -> Result<Constant, BuildError> {
        self.build_temp(alloca.into())
    }

    pub fn build_load(&mut self, load: Load) -> Result<Constant, BuildError> {
        self.build_temp(load.into())
    }

    pub fn build_store(&mut self, store: Store) -> Result<(), BuildError> {
        self.add_instruction(store.into())
    }

    pub fn build_gep(&mut self, gep: GetElementPtr) -> Result<Constant, BuildError> {
        self.build_temp(gep.into())
    }

    /// Calls returning `void` produce no value
    pub fn build_call(&mut self, call: Call) -> Result<Option<Constant>, BuildError> {
        if call.return_type == Type::Void {
            self.add_instruction(call.into())?;
            Ok(None)
        } else {
            self.build_temp(call.into()).map(Some)
        }
    }

    pub fn build_ret(&mut self, ret: Ret) -> Result<(), BuildError> {
        self.add_instruction(ret.into())
    }

    pub fn finish(self) -> Function {
        self.function
    }
}
