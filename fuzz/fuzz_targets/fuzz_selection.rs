#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(selection) = permtree::parse_selection(content) {
            let rendered = selection.to_string();
            assert_eq!(permtree::parse_selection(&rendered).ok(), Some(selection));
        }
    }
});
