#![no_main]

use libfuzzer_sys::fuzz_target;
use permtree::domain::services::{apply_toggle, display_rows, expand_all};
use permtree::infrastructure::{FsTreeRepository, TreeFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Lenient loading keeps duplicate ids, which must not hang the cascade
        let repository = FsTreeRepository::new().with_reject_duplicate_ids(false);
        if let Ok(loaded) = repository.parse(content, TreeFormat::Json) {
            let index = loaded.index;
            for &id in index.all_ids() {
                let checked = apply_toggle(&index, &loaded.selection, id, true, true);
                let _ = apply_toggle(&index, &checked, id, false, true);
            }
            let _ = display_rows(&index, &loaded.selection, &expand_all(&index, true));
        }
    }
});
