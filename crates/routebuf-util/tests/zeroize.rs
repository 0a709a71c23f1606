// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zeroize_tests {
    use routebuf_util::{fast_zeroize_slice, is_slice_zeroized, zeroize_primitive};

    #[test]
    fn test_fast_zeroize_slice_zeros_all_bytes() {
        let mut data = vec![0xABu8; 1024];
        fast_zeroize_slice(&mut data);
        assert!(is_slice_zeroized(&data));
    }

    #[test]
    fn test_fast_zeroize_slice_usize_elements() {
        let mut routes = vec![7usize, 3, 1, 0];
        fast_zeroize_slice(&mut routes);
        assert!(routes.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_fast_zeroize_slice_empty_slice() {
        let mut data: Vec<u8> = vec![];
        fast_zeroize_slice(&mut data); // should not panic
        assert!(data.is_empty());
    }

    #[test]
    fn test_zeroize_primitive() {
        let mut value = 0xDEAD_BEEFu32;
        zeroize_primitive(&mut value);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_is_slice_zeroized() {
        assert!(is_slice_zeroized(&[]));
        assert!(is_slice_zeroized(&[0u8; 10]));
        assert!(!is_slice_zeroized(&[0u8, 0, 1, 0]));
        assert!(!is_slice_zeroized(&[1u8, 0, 0, 0]));
        assert!(!is_slice_zeroized(&[0u8, 0, 0, 1]));
    }
}
