#![no_main]

use jvm_descriptor::DescriptorParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(parser) = DescriptorParser::new(data) else {
        return;
    };
    let _ = parser.return_type();
    let _ = parser.parsed_return_type();
    if let Ok(count) = parser.num_parameters() {
        for index in 0..count {
            assert!(parser.parameter(index).is_ok());
            assert!(parser.slots_from_top_of_stack(index).is_ok());
        }
        assert!(parser.parameter(count).is_err());
    }
});
