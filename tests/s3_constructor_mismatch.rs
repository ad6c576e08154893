// [tests/s3_constructor_mismatch.rs]
//! A constructor declaring two parameters must never resolve against a
//! single supplied argument, and a constructor whose ABI and source
//! disagree on arity must never resolve either. Both are fatal before any
//! deployer subprocess is ever spawned.

use hyperforge_constructor_resolver::{resolve, ResolverError, SuppliedArguments};
use serde_json::json;

const ABI_WITH_TWO_ARG_CONSTRUCTOR: &str = r#"[
    {"type":"constructor","inputs":[
        {"name":"owner","type":"address"},
        {"name":"supply","type":"uint256"}
    ],"stateMutability":"nonpayable"}
]"#;

const SOURCE_WITH_TWO_ARG_CONSTRUCTOR: &str = r#"
pragma solidity ^0.8.0;
contract Token {
    constructor(address owner, uint256 supply) {}
}
"#;

#[test]
fn single_supplied_argument_against_two_param_constructor_is_rejected() {
    let supplied = SuppliedArguments::Positional(vec![json!("0x000000000000000000000000000000000000ab")]);

    let result = resolve(
        ABI_WITH_TWO_ARG_CONSTRUCTOR,
        SOURCE_WITH_TWO_ARG_CONSTRUCTOR,
        supplied,
        "0x0000000000000000000000000000000000dead",
    );

    assert!(matches!(result, Err(ResolverError::ArgumentCountMismatch { expected: 2, got: 1 })));
}

#[test]
fn abi_and_source_disagreeing_on_constructor_arity_names_both_signatures() {
    let source_with_one_param = r#"
        pragma solidity ^0.8.0;
        contract Token {
            constructor(address owner) {}
        }
    "#;
    let supplied = SuppliedArguments::Positional(vec![
        json!("0x000000000000000000000000000000000000ab"),
        json!(1000),
    ]);

    let result = resolve(ABI_WITH_TWO_ARG_CONSTRUCTOR, source_with_one_param, supplied, "0x0000000000000000000000000000000000dead");

    match result {
        Err(ResolverError::ConstructorMismatch { abi_signature, source_signature }) => {
            assert_eq!(abi_signature, "constructor(address,uint256)");
            assert_eq!(source_signature, "constructor(address)");
        }
        other => panic!("expected ConstructorMismatch, got {other:?}"),
    }
}
