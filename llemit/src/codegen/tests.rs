//! Unit tests for the generator

use pretty_assertions::assert_eq;
use super::*;
use crate::error::{ErrorKind, GenError};
use crate::ir::*;

fn i8_ptr() -> Type {
    Type::i8().pointer_to()
}

fn render(instr: impl Into<Instruction>) -> String {
    instr.into().generate().unwrap()
}

#[test]
fn test_integer_and_nested_types() {
    assert_eq!(Type::i32().generate().unwrap(), "i32");
    assert_eq!(Type::Integer(1).generate().unwrap(), "i1");
    assert_eq!(Type::i32().pointer_to().pointer_to().generate().unwrap(), "i32**");
    assert_eq!(Type::array(Type::i8(), 13).generate().unwrap(), "[13 x i8]");
    assert_eq!(
        Type::array(Type::array(i8_ptr(), 2), 3).pointer_to().generate().unwrap(),
        "[3 x [2 x i8*]]*"
    );
}

#[test]
fn test_type_rendering_is_repeatable() {
    let ty = Type::array(Type::i32().pointer_to(), 7);
    assert_eq!(ty.generate(), ty.generate());
}

#[test]
fn test_unsupported_types() {
    for ty in [
        Type::Void,
        Type::Double,
        Type::Label,
        Type::Structure,
        Type::vector(Type::i32(), 4),
    ] {
        let err = ty.generate().unwrap_err();
        assert_eq!(err, GenError::UnsupportedType(ty.kind()));
        assert_eq!(err.kind(), ErrorKind::Unimplemented);
    }

    // The failure surfaces through any amount of nesting
    let nested = Type::array(Type::Half, 2).pointer_to();
    assert_eq!(nested.generate(), Err(GenError::UnsupportedType(TypeKind::Half)));
}

#[test]
fn test_integer_width_bounds() {
    assert!(Type::Integer(0).generate().unwrap_err().is_malformed());
    assert!(Type::Integer(MAX_INTEGER_BITS + 1).generate().unwrap_err().is_malformed());
    assert_eq!(Type::Integer(MAX_INTEGER_BITS).generate().unwrap(), "i8388608");
}

#[test]
fn test_constants() {
    assert_eq!(Constant::Boolean(true).generate().unwrap(), "1");
    assert_eq!(Constant::Boolean(false).generate().unwrap(), "0");
    assert_eq!(Constant::Integer(-42).generate().unwrap(), "-42");
    assert_eq!(Constant::Float(2.5).generate().unwrap(), "2.5");
    assert_eq!(Constant::string("Hello World!\\00").generate().unwrap(), "c\"Hello World!\\00\"");
    assert_eq!(Constant::local("val").generate().unwrap(), "%val");
    assert_eq!(Constant::global("msg").generate().unwrap(), "@msg");
}

#[test]
fn test_string_constant_is_not_terminated_implicitly() {
    assert_eq!(Constant::string("abc").generate().unwrap(), "c\"abc\"");
}

#[test]
fn test_null_constant_is_unsupported() {
    assert_eq!(
        Constant::Null.generate(),
        Err(GenError::UnsupportedConstant(ConstantKind::Null))
    );
}

#[test]
fn test_empty_reference_is_malformed() {
    assert!(Constant::local("").generate().unwrap_err().is_malformed());
    assert!(Constant::global("").generate().unwrap_err().is_malformed());
}

#[test]
fn test_attribute_keywords() {
    assert_eq!(Linkage::Internal.to_string(), "internal");
    assert_eq!(Linkage::AvailableExternally.to_string(), "available_externally");
    assert_eq!(Linkage::LinkonceOdr.to_string(), "linkonce_odr");
    assert_eq!(Linkage::ExternWeak.to_string(), "extern_weak");
    assert_eq!(DllStorageClass::DllExport.to_string(), "dllexport");
    assert_eq!(ThreadLocal::InitialExec.to_string(), "thread_local(initialexec)");
    assert_eq!(CodeModel::Kernel.to_string(), "kernel");
    assert_eq!(CallingConvention::PreserveMost.to_string(), "preservemost");
    assert_eq!(CallingConvention::CxxFastTls.to_string(), "cxxfasttls");
    assert_eq!(TailCall::MustTail.to_string(), "musttail");

    assert_eq!(Visibility::Hidden.to_string(), "");
    assert_eq!(PreemptionSpecifier::DsoLocal.to_string(), "");
}

#[test]
fn test_ret() {
    assert_eq!(render(Ret::new(Type::i32(), Constant::Integer(0))), "ret i32 0");
    assert_eq!(render(Ret::new(Type::i32(), Constant::local("val"))), "ret i32 %val");
}

#[test]
fn test_ret_without_value() {
    let err = Ret::bare(Type::i32()).generate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert_eq!(err.to_string(), "malformed instruction: `ret` of a non-void type needs a value");

    let err = Ret::bare(Type::Void).generate().unwrap_err();
    assert_eq!(err, GenError::UnsupportedType(TypeKind::Void));
}

#[test]
fn test_alloca() {
    assert_eq!(render(Instruction::from(Alloca::new(Type::i32())).named("ptr")), "%ptr = alloca i32");
    assert_eq!(
        render(Alloca::new(Type::i32()).with_elements(4).with_alignment(16)),
        "alloca i32, i32 4, align 16"
    );
    assert_eq!(
        render(Alloca::new(Type::i8()).with_inalloca().with_addrspace(5)),
        "alloca inalloca i8, addrspace(5)"
    );
    // A single element never prints the count clause
    assert_eq!(render(Alloca::new(Type::i8()).with_elements(1)), "alloca i8");
}

#[test]
fn test_load() {
    let load = Load::new(Type::i32(), Type::i32().pointer_to(), Constant::local("ptr"));
    assert_eq!(render(Instruction::from(load.clone()).named("val")), "%val = load i32, i32* %ptr");
    assert_eq!(
        render(load.with_volatile().with_alignment(4)),
        "load volatile i32, i32* %ptr, align 4"
    );
}

#[test]
fn test_store() {
    let store = Store::new(Type::i32(), Constant::Integer(123), Type::i32().pointer_to(), Constant::local("ptr"));
    assert_eq!(render(store.clone()), "store i32 123, i32* %ptr");
    assert_eq!(
        render(store.with_volatile().with_alignment(8)),
        "store volatile i32 123, i32* %ptr, align 8"
    );
}

#[test]
fn test_getelementptr() {
    let array = Type::array(Type::i8(), 13);
    let gep = GetElementPtr::first_element(array.clone(), array.clone().pointer_to(), Constant::global("msg"));
    assert_eq!(
        render(Instruction::from(gep).named("msg_ptr")),
        "%msg_ptr = getelementptr [13 x i8], [13 x i8]* @msg, i32 0, i32 0"
    );

    let gep = GetElementPtr::new(array.clone(), array.pointer_to(), Constant::global("msg"))
        .with_inbounds()
        .with_index(Type::i64(), Constant::Integer(0))
        .with_index(Type::i64(), Constant::local("i"));
    assert_eq!(
        render(gep),
        "getelementptr inbounds [13 x i8], [13 x i8]* @msg, i64 0, i64 %i"
    );

    let gep = GetElementPtr::new(Type::i32(), Type::i32().pointer_to(), Constant::local("p"));
    assert_eq!(render(gep), "getelementptr i32, i32* %p");
}

#[test]
fn test_call() {
    let call = Call::new(Type::i32(), "puts").with_argument(i8_ptr(), Constant::local("msg_ptr"));
    assert_eq!(render(call), "call i32 @puts(i8* %msg_ptr)");

    let call = Call::new(Type::i32(), "max")
        .with_tail(TailCall::Tail)
        .with_calling_convention(CallingConvention::Fast)
        .with_addrspace(1)
        .with_argument(Type::i32(), Constant::Integer(1))
        .with_argument(Type::i32(), Constant::local("x"));
    assert_eq!(
        render(Instruction::from(call).named("m")),
        "%m = tail call fast addrspace(1) i32 @max(i32 1, i32 %x)"
    );

    assert_eq!(
        render(Call::new(Type::i32(), "rand").with_tail(TailCall::NoTail)),
        "notail call i32 @rand()"
    );
}

#[test]
fn test_unimplemented_opcode() {
    let err = Instruction::from(Opcode::Br).generate().unwrap_err();
    assert_eq!(err, GenError::UnsupportedOpcode(Opcode::Br));
    assert!(err.is_unimplemented());

    let err = Instruction::from(Opcode::Add).named("sum").generate().unwrap_err();
    assert_eq!(err, GenError::UnsupportedOpcode(Opcode::Add));
}

#[test]
fn test_implemented_opcode_without_operands_is_malformed() {
    let err = Instruction::from(Opcode::Call).generate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert_eq!(err.to_string(), "malformed instruction: `call` carries no operands");
}

#[test]
fn test_operand_errors_carry_context() {
    let call = Call::new(Type::i32(), "f")
        .with_argument(Type::i32(), Constant::Integer(1))
        .with_argument(Type::i32(), Constant::Null);
    let err = Instruction::from(call).generate().unwrap_err();
    assert_eq!(err.context_path(), vec!["argument #1"]);
    assert_eq!(err.root(), &GenError::UnsupportedConstant(ConstantKind::Null));

    assert!(Call::new(Type::i32(), "").generate().unwrap_err().is_malformed());
    assert!(Instruction::from(Alloca::new(Type::i32())).named("").generate().unwrap_err().is_malformed());
}

#[test]
fn test_basic_block() {
    let block = BasicBlock::new("entry")
        .with_instruction(Instruction::from(Alloca::new(Type::i32())).named("p"))
        .with_instruction(Ret::new(Type::i32(), Constant::Integer(0)));
    assert_eq!(
        block.generate().unwrap(),
        "entry:\n    %p = alloca i32\n    ret i32 0\n"
    );

    assert_eq!(BasicBlock::new("empty").generate().unwrap(), "empty:\n");
    assert!(BasicBlock::new("").generate().unwrap_err().is_malformed());
}

#[test]
fn test_basic_block_failure_names_the_instruction() {
    let block = BasicBlock::new("entry")
        .with_instruction(Ret::new(Type::i32(), Constant::Integer(0)))
        .with_instruction(Opcode::Unreachable);
    let err = block.generate().unwrap_err();
    assert_eq!(err.context_path(), vec!["instruction #1 (unreachable)"]);
}

#[test]
fn test_global_minimal() {
    let global = GlobalVariable::new("my_var", Type::i32(), Constant::Integer(123));
    assert_eq!(global.generate().unwrap(), "@my_var = constant i32 123\n");

    let global = global.mutable();
    assert_eq!(global.generate().unwrap(), "@my_var = global i32 123\n");
}

#[test]
fn test_global_string() {
    let global = GlobalVariable::new(
        "msg",
        Type::array(Type::i8(), 13),
        Constant::string("Hello World!\\00"),
    )
    .with_linkage(Linkage::Internal);
    assert_eq!(
        global.generate().unwrap(),
        "@msg = internal constant [13 x i8] c\"Hello World!\\00\"\n"
    );
}

#[test]
fn test_global_every_attribute() {
    let global = GlobalVariable::new("counter", Type::i64(), Constant::Integer(0))
        .mutable()
        .with_linkage(Linkage::WeakOdr)
        .with_dll_storage_class(DllStorageClass::DllImport)
        .with_thread_local(ThreadLocal::LocalExec)
        .with_unnamed_addr()
        .with_local_unnamed_addr()
        .with_addr_space(3)
        .with_externally_initialized()
        .with_section(".tdata")
        .with_partition("part")
        .with_alignment(8)
        .with_code_model(CodeModel::Large)
        .with_no_sanitize_address()
        .with_no_sanitize_hwaddress()
        .with_sanitize_address_dyninit()
        .with_sanitize_memtag();
    assert_eq!(
        global.generate().unwrap(),
        "@counter = weak_odr dllimport thread_local(localexec) unnamed_addr local_unnamed_addr \
         addrspace(3) external global i64 0, section \".tdata\", partition \"part\", align 8, \
         codemodel \"large\", no_sanitize_address, no_sanitize_hwaddress, \
         sanitize_address_dyninit, sanitize_memtag\n"
    );
}

#[test]
fn test_empty_keywords_leave_no_double_space() {
    let global = GlobalVariable::new("g", Type::i32(), Constant::Integer(1))
        .with_visibility(Visibility::Hidden)
        .with_preemption_specifier(PreemptionSpecifier::DsoLocal);
    let text = global.generate().unwrap();
    assert_eq!(text, "@g = constant i32 1\n");
    assert!(!text.contains("  "));
}

#[test]
fn test_global_errors() {
    let err = GlobalVariable::new("v", Type::vector(Type::i32(), 4), Constant::Integer(0))
        .generate()
        .unwrap_err();
    assert_eq!(err.context_path(), vec!["global '@v'"]);
    assert_eq!(err.root(), &GenError::UnsupportedType(TypeKind::Vector));

    let err = GlobalVariable::new("", Type::i32(), Constant::Integer(0)).generate().unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_external_function() {
    let puts = ExternalFunction::new("puts", Type::i32()).with_parameter(i8_ptr());
    assert_eq!(puts.generate().unwrap(), "declare i32 @puts(i8*)");

    let decl = ExternalFunction::new("memcpy_fast", Type::i32())
        .with_linkage(Linkage::ExternWeak)
        .with_dll_storage_class(DllStorageClass::DllImport)
        .with_calling_convention(CallingConvention::Fast)
        .with_parameter(i8_ptr())
        .with_parameter(FunctionParameter::named(Type::i64(), "len"))
        .with_unnamed_addr()
        .with_alignment(16);
    assert_eq!(
        decl.generate().unwrap(),
        "declare extern_weak dllimport fast i32 @memcpy_fast(i8*, i64 %len) unnamed_addr align 16"
    );
}

#[test]
fn test_function_signature_and_trailers() {
    let function = Function::new("main", Type::i32())
        .with_parameter(FunctionParameter::named(Type::i32(), "argc"))
        .with_parameter(FunctionParameter::named(Type::i32().pointer_to().pointer_to(), "argv"))
        .with_block(
            BasicBlock::new("entry").with_instruction(Ret::new(Type::i32(), Constant::Integer(0))),
        );
    assert_eq!(
        function.generate().unwrap(),
        "define i32 @main(i32 %argc, i32** %argv) {\nentry:\n    ret i32 0\n}\n"
    );

    let function = Function::new("helper", Type::i8())
        .with_linkage(Linkage::Private)
        .with_calling_convention(CallingConvention::Cold)
        .with_local_unnamed_addr()
        .with_addr_space(1)
        .with_section(".text.cold")
        .with_partition("p")
        .with_alignment(32);
    assert_eq!(
        function.generate().unwrap(),
        "define private cold i8 @helper() local_unnamed_addr addrspace(1) section \".text.cold\" \
         partition \"p\" align 32 {\n}\n"
    );
}

#[test]
fn test_function_failure_path() {
    let function = Function::new("main", Type::i32()).with_block(
        BasicBlock::new("entry")
            .with_instruction(Alloca::new(Type::i32()))
            .with_instruction(Opcode::Br),
    );
    let err = function.generate().unwrap_err();
    assert_eq!(
        err.context_path(),
        vec!["function '@main'", "block 'entry'", "instruction #1 (br)"]
    );
    assert_eq!(err.root(), &GenError::UnsupportedOpcode(Opcode::Br));

    let err = Function::new("f", Type::Void).generate().unwrap_err();
    assert_eq!(err.context_path(), vec!["function '@f'", "return type"]);
}

#[test]
fn test_free_function_matches_trait() {
    let ty = Type::i32().pointer_to();
    assert_eq!(generate(&ty), ty.generate());
}
