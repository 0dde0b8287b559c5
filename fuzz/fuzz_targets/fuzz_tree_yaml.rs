#![no_main]

use libfuzzer_sys::fuzz_target;
use permtree::infrastructure::{FsTreeRepository, TreeFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = FsTreeRepository::new().parse(content, TreeFormat::Yaml);
    }
});
