mod e0001_syntax_error;
mod e0002_named_entity_not_found;
mod e0003_named_entity_already_defined;
mod e0004_assignment_target_not_lvalue;
mod e0005_assignment_target_const;
mod e0006_assignment_target_function;
mod e0007_address_of_rvalue;
mod e0008_deref_operand_not_pointer;
mod e0009_field_not_found;
mod e0010_field_access_receiver_not_struct;
mod e0011_index_target_not_array;
mod e0012_call_target_not_function;
mod e0013_call_wrong_number_of_arguments;
mod e0014_type_mismatch;
mod e0015_binary_operator_unsupported_types;
mod e0016_unary_operator_unsupported_type;
mod e0017_cannot_infer_empty_array_type;
mod e0018_reference_body_not_lvalue;
mod e0019_reference_body_discards_const;
mod e0020_field_initialized_twice;
mod e0021_address_of_function;
mod e0022_unknown_dialect;
mod e0023_named_entity_kind_mismatch;
mod e0024_function_used_as_value;
mod e0025_object_too_large;

pub mod constructors {
    pub use super::e0001_syntax_error::syntax_error;
    pub use super::e0002_named_entity_not_found::named_entity_not_found;
    pub use super::e0003_named_entity_already_defined::named_entity_already_defined;
    pub use super::e0004_assignment_target_not_lvalue::assignment_target_not_lvalue;
    pub use super::e0005_assignment_target_const::assignment_target_const;
    pub use super::e0006_assignment_target_function::assignment_target_function;
    pub use super::e0007_address_of_rvalue::address_of_rvalue;
    pub use super::e0008_deref_operand_not_pointer::deref_operand_not_pointer;
    pub use super::e0009_field_not_found::field_not_found;
    pub use super::e0010_field_access_receiver_not_struct::field_access_receiver_not_struct;
    pub use super::e0011_index_target_not_array::index_target_not_array;
    pub use super::e0012_call_target_not_function::call_target_not_function;
    pub use super::e0013_call_wrong_number_of_arguments::call_wrong_number_of_arguments;
    pub use super::e0014_type_mismatch::{type_mismatch, TypeMismatchContext};
    pub use super::e0015_binary_operator_unsupported_types::binary_operator_unsupported_types;
    pub use super::e0016_unary_operator_unsupported_type::unary_operator_unsupported_type;
    pub use super::e0017_cannot_infer_empty_array_type::cannot_infer_empty_array_type;
    pub use super::e0018_reference_body_not_lvalue::reference_body_not_lvalue;
    pub use super::e0019_reference_body_discards_const::reference_body_discards_const;
    pub use super::e0020_field_initialized_twice::field_initialized_twice;
    pub use super::e0021_address_of_function::address_of_function;
    pub use super::e0022_unknown_dialect::unknown_dialect;
    pub use super::e0023_named_entity_kind_mismatch::named_entity_kind_mismatch;
    pub use super::e0024_function_used_as_value::function_used_as_value;
    pub use super::e0025_object_too_large::object_too_large;
}
