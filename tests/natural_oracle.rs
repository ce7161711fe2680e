#[cfg(test)]
mod test {
    use big_natural::{Natural, NaturalError};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::Zero;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn to_natural(n: &BigUint) -> Natural {
        n.to_radix_be(10)
            .into_iter()
            .fold(Natural::zero(), |acc, d| acc * 10u8 + d)
    }

    fn assert_canonical(n: &Natural) {
        assert_ne!(n.digits().last(), Some(&0), "leading zero in {:?}", n.digits());
        assert!(n.digits().iter().all(|&d| d < 10), "bad digit in {:?}", n.digits());
    }

    fn assert_same(n: &Natural, expected: &BigUint) {
        assert_canonical(n);
        assert_eq!(n.to_string(), expected.to_string());
    }

    #[test]
    fn test_add_sub_mul() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..30 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let b: BigUint = prng.sample(RandomBits::new(200));
            let c: BigUint = prng.sample(RandomBits::new(64));
            let (na, nb, nc) = (to_natural(&a), to_natural(&b), to_natural(&c));

            assert_same(&(&na + &nb), &(&a + &b));
            assert_same(&(&na * &nb), &(&a * &b));
            if a >= b {
                assert_same(&(&na - &nb), &(&a - &b));
            } else {
                assert_eq!(na.try_sub(&nb), Err(NaturalError::NegativeResult));
            }

            assert_eq!(&na + &Natural::zero(), na);
            assert_eq!(&na + &nb, &nb + &na);
            assert_eq!(&(&na + &nb) + &nc, &na + &(&nb + &nc));
            assert_eq!(&(&na + &nb) - &nb, na);
            assert_eq!(&na * &Natural::one(), na);
            assert!((&na * &Natural::zero()).is_zero());
        }
    }

    #[test]
    fn test_div_rem() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for bits in [4u64, 8, 64, 200, 320] {
            for _ in 0..10 {
                let a: BigUint = prng.sample(RandomBits::new(320));
                let b: BigUint = prng.sample(RandomBits::new(bits));
                if b.is_zero() {
                    continue;
                }
                let (na, nb) = (to_natural(&a), to_natural(&b));

                let q = &na / &nb;
                let r = &na % &nb;
                assert_same(&q, &(&a / &b));
                assert_same(&r, &(&a % &b));
                assert_eq!(&(&q * &nb) + &r, na);
                assert!(r < nb);
            }
        }
    }

    #[test]
    fn test_power() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..20 {
            let base: u32 = prng.gen();
            let exponent: u32 = prng.gen_range(0..30);
            let n = Natural::from(base).power(&Natural::from(exponent));
            assert_same(&n, &BigUint::from(base).pow(exponent));
        }
    }

    #[test]
    fn test_to_base_round_trip() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for base in [2u32, 8, 10, 16] {
            for _ in 0..5 {
                let a: BigUint = prng.sample(RandomBits::new(128));
                let na = to_natural(&a);
                let nbase = Natural::from(base);

                let digits = na.to_base(&nbase).unwrap();
                let rebuilt = digits
                    .iter()
                    .rev()
                    .fold(Natural::zero(), |acc, d| &acc * &nbase + d);
                assert_eq!(rebuilt, na);

                let expected: Vec<u8> = if a.is_zero() { vec![] } else { a.to_radix_le(base) };
                assert_eq!(na.digit_count(&nbase).unwrap(), expected.len());
                let digit_sum: u64 = expected.iter().map(|&d| d as u64).sum();
                assert_eq!(na.digit_sum(&nbase).unwrap(), digit_sum);
            }
        }
    }

    #[test]
    fn test_bitwise_u64() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..50 {
            let a: u64 = prng.gen();
            let b: u64 = prng.gen::<u64>() >> prng.gen_range(0..64u32);
            let (na, nb) = (Natural::from(a), Natural::from(b));

            assert_eq!(&na ^ &nb, a ^ b);
            assert_eq!(&na & &nb, a & b);
            assert_eq!(&na | &nb, a | b);
        }
    }

    #[test]
    fn test_bitwise_big() {
        init();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..5 {
            let a: BigUint = prng.sample(RandomBits::new(160));
            let b: BigUint = prng.sample(RandomBits::new(100));
            let (na, nb) = (to_natural(&a), to_natural(&b));

            assert_same(&(&na ^ &nb), &(&a ^ &b));
            assert_same(&(&na & &nb), &(&a & &b));
            assert_same(&(&na | &nb), &(&a | &b));
            assert!((&na ^ &na).is_zero());
        }
    }
}
