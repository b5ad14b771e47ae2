#![no_main]

use eolcheck::convert;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Control byte layout:
    // data[0]: length of the `from` token (1..=3)
    // data[1]: length of the `to` token (0..=3)
    let from_len = usize::from(data[0] % 3) + 1;
    let to_len = usize::from(data[1] % 4);
    let rest = &data[2..];
    if rest.len() < from_len + to_len {
        return;
    }
    let (from, rest) = rest.split_at(from_len);
    let (to, payload) = rest.split_at(to_len);

    let out = convert(payload, from, to);
    if from == to {
        assert_eq!(&*out, payload);
    }
});
