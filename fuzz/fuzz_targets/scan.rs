#![no_main]

use eolcheck::{check, convert, scan, LineEnding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let found = scan(data);

    // Every CR and LF byte is accounted for exactly once.
    let count = |o: Option<eolcheck::Occurrence>| o.map_or(0, |o| o.count);
    let crs = data.iter().filter(|&&b| b == b'\r').count();
    let lfs = data.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(count(found.dos) + count(found.legacy), crs);
    assert_eq!(count(found.dos) + count(found.unix), lfs);

    // Stripping DOS endings never leaves anything that looks like one.
    let stripped = convert(data, LineEnding::Dos, b"");
    assert!(scan(&stripped).dos.is_none() || found.legacy.is_some());

    if data.is_empty() {
        assert!(check(data, None).is_err());
    }
});
