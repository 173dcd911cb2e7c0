//! End-to-end rendering of complete entities

use llemit::ir::{
    BasicBlock, Call, Constant, ExternalFunction, Function, GetElementPtr,
    GlobalVariable, Instruction, Linkage, Opcode, Ret, Type,
};
use llemit::{generate, ErrorKind, GenError, Generate};
use pretty_assertions::assert_eq;

fn message_type() -> Type {
    Type::array(Type::i8(), 13)
}

fn hello_main() -> Function {
    Function::new("main", Type::i32()).with_block(
        BasicBlock::new("entry")
            .with_instruction(
                Instruction::from(GetElementPtr::first_element(
                    message_type(),
                    message_type().pointer_to(),
                    Constant::global("msg"),
                ))
                .named("msg_ptr"),
            )
            .with_instruction(
                Call::new(Type::i32(), "puts")
                    .with_argument(Type::i8().pointer_to(), Constant::local("msg_ptr")),
            )
            .with_instruction(Ret::new(Type::i32(), Constant::Integer(0))),
    )
}

#[test]
fn test_hello_world_global() {
    let msg = GlobalVariable::new("msg", message_type(), Constant::string("Hello World!\\00"))
        .with_linkage(Linkage::Internal);
    assert_eq!(
        generate(&msg).unwrap(),
        "@msg = internal constant [13 x i8] c\"Hello World!\\00\"\n"
    );
}

#[test]
fn test_puts_declaration() {
    let puts = ExternalFunction::new("puts", Type::i32()).with_parameter(Type::i8().pointer_to());
    assert_eq!(generate(&puts).unwrap(), "declare i32 @puts(i8*)");
}

#[test]
fn test_hello_world_main() {
    let expected = "\
define i32 @main() {
entry:
    %msg_ptr = getelementptr [13 x i8], [13 x i8]* @msg, i32 0, i32 0
    call i32 @puts(i8* %msg_ptr)
    ret i32 0
}
";
    assert_eq!(hello_main().generate().unwrap(), expected);
}

#[test]
fn test_rendering_is_idempotent() {
    let main = hello_main();
    let first = main.generate().unwrap();
    let second = main.generate().unwrap();
    assert_eq!(first, second);
    assert_eq!(main, hello_main());
}

#[test]
fn test_failed_render_produces_no_text() {
    let mut main = hello_main();
    main.body[0].instructions.insert(1, Instruction::from(Opcode::Br));

    let result = main.generate();
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unimplemented);
    assert_eq!(err.root(), &GenError::UnsupportedOpcode(Opcode::Br));
    assert_eq!(
        err.to_string(),
        "in function '@main': in block 'entry': in instruction #1 (br): \
         unimplemented instruction opcode `br`"
    );
}

#[test]
fn test_unsupported_type_anywhere_fails_the_entity() {
    let decl = ExternalFunction::new("take_vec", Type::i32())
        .with_parameter(Type::vector(Type::i32(), 4));
    let err = decl.generate().unwrap_err();
    assert_eq!(err.context_path(), vec!["declaration '@take_vec'", "parameter #0"]);
    assert!(err.is_unimplemented());
}

#[test]
fn test_no_stray_separators_without_optionals() {
    let global = GlobalVariable::new("x", Type::i32(), Constant::Integer(5));
    let text = global.generate().unwrap();
    assert_eq!(text, "@x = constant i32 5\n");
    assert!(!text.contains("  "));
    assert!(!text.contains(",,"));
    assert!(!text.trim_end().ends_with(','));

    let function = Function::new("f", Type::i32());
    assert_eq!(function.generate().unwrap(), "define i32 @f() {\n}\n");
}

#[test]
fn test_independent_models_render_in_parallel() {
    let expected = hello_main().generate().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| hello_main().generate()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), expected);
    }
}
