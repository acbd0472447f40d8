//! Karatsuba multiplication of polynomials over the 16-bit carrier ring
//!
//! Inputs are coefficient slices whose length is a power of two. The
//! recursion splits each operand in half, computes three half-size products
//! (low*low, high*high, (low+high)*(low+high)), and recombines them into a
//! full 2N-coefficient product. `karamul` then folds that product back into
//! the quotient ring, where X^N = -1.
//!
//! Control flow depends only on operand lengths, never on coefficient
//! values.

use super::zq::Zq;

/// Full product of two degree N-1 polynomials, as 2N coefficients.
/// N must be a power of two; the base case is the scalar product at N = 1.
fn karatsuba(polya: &[Zq], polyb: &[Zq]) -> Vec<Zq> {
    debug_assert_eq!(polya.len(), polyb.len());
    debug_assert!(polya.len().is_power_of_two());

    let n = polya.len();
    if n == 1 {
        return vec![polya[0] * polyb[0], Zq::ZERO];
    }

    let half = n / 2;
    let (polya0, polya1) = polya.split_at(half);
    let (polyb0, polyb1) = polyb.split_at(half);

    let mut polyax = vec![Zq::ZERO; half];
    let mut polybx = vec![Zq::ZERO; half];
    for i in 0..half {
        polyax[i] = polya0[i] + polya1[i];
        polybx[i] = polyb0[i] + polyb1[i];
    }

    let polya0b0 = karatsuba(polya0, polyb0);
    let polya1b1 = karatsuba(polya1, polyb1);
    let mut polyaxbx = karatsuba(&polyax, &polybx);

    for i in 0..n {
        polyaxbx[i] = polyaxbx[i] - (polya0b0[i] + polya1b1[i]);
    }

    let mut polyab = vec![Zq::ZERO; 2 * n];
    for i in 0..n {
        polyab[i] += polya0b0[i];
        polyab[n + i] += polya1b1[i];
        polyab[half + i] += polyaxbx[i];
    }

    polyab
}

/// Product of two degree N-1 polynomials reduced modulo X^N + 1.
///
/// The upper N coefficients of the full product are subtracted from the
/// lower N, because X^N = -1 in the quotient ring.
pub fn karamul(polya: &[Zq], polyb: &[Zq]) -> Vec<Zq> {
    let n = polya.len();
    let polyab = karatsuba(polya, polyb);

    let mut res = vec![Zq::ZERO; n];
    for i in 0..n {
        res[i] = polyab[i] - polyab[n + i];
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    // Schoolbook negacyclic multiplication, the reference for karamul.
    fn schoolbook(a: &[Zq], b: &[Zq]) -> Vec<Zq> {
        let n = a.len();
        let mut res = vec![Zq::ZERO; n];
        for i in 0..n {
            for j in 0..n {
                let prod = a[i] * b[j];
                if i + j < n {
                    res[i + j] += prod;
                } else {
                    res[i + j - n] -= prod;
                }
            }
        }
        res
    }

    fn random_poly<R: Rng>(rng: &mut R, n: usize) -> Vec<Zq> {
        (0..n).map(|_| Zq::new(rng.gen())).collect()
    }

    #[test]
    fn matches_schoolbook_small() {
        let a = [Zq::new(1), Zq::new(2), Zq::new(3), Zq::new(4)];
        let b = [Zq::new(5), Zq::new(6), Zq::new(7), Zq::new(8)];
        assert_eq!(karamul(&a, &b), schoolbook(&a, &b));
    }

    #[test]
    fn matches_schoolbook_full_degree() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for _ in 0..4 {
            let a = random_poly(&mut rng, 256);
            let b = random_poly(&mut rng, 256);
            assert_eq!(karamul(&a, &b), schoolbook(&a, &b));
        }
    }

    #[test]
    fn x_to_n_wraps_to_minus_one() {
        // X^(N-1) * X = X^N = -1
        let n = 256;
        let mut a = vec![Zq::ZERO; n];
        let mut b = vec![Zq::ZERO; n];
        a[n - 1] = Zq::new(1);
        b[1] = Zq::new(1);

        let prod = karamul(&a, &b);
        assert_eq!(prod[0], -Zq::new(1));
        assert!(prod[1..].iter().all(|&c| c == Zq::ZERO));
    }
}
