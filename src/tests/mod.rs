use itertools::Itertools;
use proptest::prelude::*;

use crate::types::PrimitiveType;

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][\w\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..5).prop_map(|v| v.join("/"))
}

pub(crate) fn arb_non_array_field_type_token() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(|it| it.descriptor().to_string()),
        arb_class_name().prop_map(|it| format!("L{it};")),
    ]
}

prop_compose! {
    pub(crate) fn arb_field_type_token()(
        element in arb_non_array_field_type_token(),
        dim in 0..4usize,
    ) -> String {
        format!("{}{element}", "[".repeat(dim))
    }
}

pub(crate) fn arb_return_type_token() -> impl Strategy<Value = String> {
    prop_oneof![Just("V".to_owned()), arb_field_type_token()]
}

pub(crate) fn arb_method_descriptor(max_params: usize) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_field_type_token(), 0..max_params),
        arb_return_type_token(),
    )
        .prop_map(|(params, ret)| format!("({}){ret}", params.iter().join("")))
}
