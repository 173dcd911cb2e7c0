//! Built-in sample modules
//!
//! Small complete programs used by the driver and the tests.

use crate::error::BuildError;
use crate::ir::{
    Alloca, BasicBlock, Call, Constant, ExternalFunction, Function,
    FunctionBuilder, FunctionParameter, GetElementPtr, GlobalVariable,
    Instruction, Linkage, Load, Module, Ret, Store, Type,
};

/// Names accepted by [`by_name`]
pub const SAMPLE_NAMES: [&str; 2] = ["hello", "memory"];

pub fn by_name(name: &str) -> Option<Result<Module, BuildError>> {
    match name {
        "hello" => Some(Ok(hello_world())),
        "memory" => Some(stack_memory()),
        _ => None,
    }
}

fn puts() -> ExternalFunction {
    ExternalFunction::new("puts", Type::i32()).with_parameter(Type::i8().pointer_to())
}

/// Classic hello world: a string constant handed to `puts`
pub fn hello_world() -> Module {
    let message = Type::array(Type::i8(), 13);

    let entry = BasicBlock::new("entry")
        .with_instruction(
            Instruction::from(GetElementPtr::first_element(
                message.clone(),
                message.clone().pointer_to(),
                Constant::global("msg"),
            ))
            .named("msg_ptr"),
        )
        .with_instruction(
            Call::new(Type::i32(), "puts")
                .with_argument(Type::i8().pointer_to(), Constant::local("msg_ptr")),
        )
        .with_instruction(Ret::new(Type::i32(), Constant::Integer(0)));

    Module::new("hello")
        .with_global(
            GlobalVariable::new("msg", message, Constant::string("Hello World!\\00"))
                .with_linkage(Linkage::Internal),
        )
        .with_declaration(puts())
        .with_function(Function::new("main", Type::i32()).with_block(entry))
}

/// Round trip of a value through a stack slot, built with [`FunctionBuilder`]
pub fn stack_memory() -> Result<Module, BuildError> {
    let slot_type = Type::i32().pointer_to();

    let mut builder = FunctionBuilder::new("main", Type::i32());
    builder.add_parameter(FunctionParameter::named(Type::i32(), "argc"))?;
    builder.add_parameter(FunctionParameter::named(Type::i32().pointer_to().pointer_to(), "argv"))?;
    builder.append_block("entry")?;

    let ptr = builder.build_named("ptr", Alloca::new(Type::i32()))?;
    builder.build_store(Store::new(Type::i32(), Constant::Integer(123), slot_type.clone(), ptr.clone()))?;
    let val = builder.build_named("val", Load::new(Type::i32(), slot_type, ptr))?;
    builder.build_ret(Ret::new(Type::i32(), val))?;

    Ok(Module::new("memory")
        .with_global(GlobalVariable::new("my_var", Type::i32(), Constant::Integer(123)))
        .with_declaration(puts())
        .with_function(builder.finish()))
}
