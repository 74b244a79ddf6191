#![no_main]
use libfuzzer_sys::fuzz_target;
use toonpack::{EncodeOptions, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(s) {
            let opts = EncodeOptions::default();
            let _ = encode(&json_value, &opts);

            let mut opts_tab = EncodeOptions::default();
            opts_tab.delimiter = '\t';
            let _ = encode(&json_value, &opts_tab);

            let mut opts_pipe = EncodeOptions::default();
            opts_pipe.delimiter = '|';
            let _ = encode(&json_value, &opts_pipe);

            let mut opts_marked = EncodeOptions::default();
            opts_marked.length_marker = "#".to_string();
            opts_marked.indent = 4;
            let _ = encode(&json_value, &opts_marked);

            // Tight limit so the depth error path gets exercised too.
            let mut opts_shallow = EncodeOptions::default();
            opts_shallow.max_depth = 4;
            let _ = encode(&json_value, &opts_shallow);
        }
    }
});
