// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use shc_qr::{QrConfig, QrGenerator};

proptest! {
  #[test]
  fn chunked_round_trip_holds_for_arbitrary_oversized_jws(extra_chunks in 1usize..5, tail in 0usize..50) {
    let generator = QrGenerator;
    let max = 200usize;
    let len = max + (extra_chunks * (max - 20)) + tail + 1;
    let jws: String = (0..len).map(|i| (b'0' + (i % 10) as u8) as char).collect();

    let config = QrConfig { max_single_qr_size: max, enable_chunking: true, ..QrConfig::default() };
    let contents = generator.qr_contents(&jws, &config).unwrap();
    prop_assert!(contents.len() >= 2);
    let recovered = generator.scan_qr(&contents).unwrap();
    prop_assert_eq!(recovered, jws);
  }
}
