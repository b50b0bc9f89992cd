#[cfg(test)]
mod _tests_index_mapper {
    use super::super::index_mapper::*;
    use crate::LatticeError;

    #[test]
    fn test_row_major_strides() {
        assert_eq!(strides(&[3, 3]), vec![3, 1]);
        assert_eq!(strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(strides(&[5]), vec![1]);
    }

    #[test]
    fn test_to_index_row_major() {
        let sizes = [3, 3];
        assert_eq!(to_index(&[0, 0], &sizes).unwrap(), 0);
        assert_eq!(to_index(&[0, 1], &sizes).unwrap(), 1);
        assert_eq!(to_index(&[1, 0], &sizes).unwrap(), 3);
        assert_eq!(to_index(&[2, 2], &sizes).unwrap(), 8);

        let sizes = [2, 3, 4];
        assert_eq!(to_index(&[1, 2, 3], &sizes).unwrap(), 12 + 8 + 3);
    }

    #[test]
    fn test_to_index_wraps_periodically() {
        let sizes = [3, 4];
        assert_eq!(to_index(&[-1, 0], &sizes).unwrap(), to_index(&[2, 0], &sizes).unwrap());
        assert_eq!(to_index(&[3, 4], &sizes).unwrap(), 0);
        assert_eq!(to_index(&[-7, 9], &sizes).unwrap(), to_index(&[2, 1], &sizes).unwrap());
    }

    #[test]
    fn test_to_coordinates() {
        assert_eq!(to_coordinates(5, &[3, 3]).unwrap(), vec![1, 2]);
        assert_eq!(to_coordinates(23, &[2, 3, 4]).unwrap(), vec![1, 2, 3]);
        assert_eq!(to_coordinates(0, &[7]).unwrap(), vec![0]);
    }

    #[test]
    fn test_roundtrip_all_indices() {
        for sizes in [vec![3, 3], vec![1, 5], vec![2, 3, 4], vec![6], vec![2, 2, 2, 2]] {
            let n = num_sites(&sizes).unwrap();
            for idx in 0..n {
                let coords = to_coordinates(idx, &sizes).unwrap();
                for (c, &s) in coords.iter().zip(&sizes) {
                    assert!(*c >= 0 && (*c as usize) < s);
                }
                assert_eq!(to_index(&coords, &sizes).unwrap(), idx);
            }
        }
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(to_index(&[], &[]), Err(LatticeError::InvalidDimension(_))));
        assert!(matches!(to_index(&[0, 0], &[3, 0]), Err(LatticeError::InvalidDimension(_))));
        assert!(matches!(to_coordinates(0, &[]), Err(LatticeError::InvalidDimension(_))));
        assert!(matches!(num_sites(&[0]), Err(LatticeError::InvalidDimension(_))));
    }

    #[test]
    fn test_mismatched_dimensions() {
        let err = to_index(&[1, 2, 3], &[3, 3]).unwrap_err();
        assert!(matches!(err, LatticeError::InvalidDimension(_)));
    }

    #[test]
    fn test_to_coordinates_out_of_range() {
        let err = to_coordinates(9, &[3, 3]).unwrap_err();
        assert!(matches!(
            err,
            LatticeError::OutOfRange {
                index: 9,
                num_sites: 9
            }
        ));
    }

    #[test]
    fn test_num_sites_overflow() {
        let err = num_sites(&[usize::MAX / 2, 4]).unwrap_err();
        assert!(matches!(err, LatticeError::InvalidDimension(_)));
    }

    #[test]
    fn test_to_index_rejects_overflowing_sizes() {
        let side = 1usize << 40;
        let coords = [(side - 1) as i64, (side - 1) as i64];
        assert!(matches!(
            to_index(&coords, &[side, side]),
            Err(LatticeError::InvalidDimension(_))
        ));
        // the same sizes are rejected by the inverse direction too
        assert!(matches!(
            to_coordinates(0, &[side, side]),
            Err(LatticeError::InvalidDimension(_))
        ));
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_strides_overflow_panics() {
        let side = 1usize << 40;
        strides(&[side, side, side]);
    }

    #[test]
    fn test_wrap_component() {
        assert_eq!(wrap_component(-1, 3), 2);
        assert_eq!(wrap_component(3, 3), 0);
        assert_eq!(wrap_component(-6, 3), 0);
        assert_eq!(wrap_component(7, 1), 0);
    }
}
