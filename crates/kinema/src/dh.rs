//! Denavit-Hartenberg link transforms and serial chains.

use crate::Matrix;

/// Standard DH parameters of one link.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DhParams {
    /// Link length, along the new x axis.
    pub a: f64,
    /// Link twist, about the new x axis.
    pub alpha: f64,
    /// Link offset, along the previous z axis.
    pub d: f64,
    /// Joint angle, about the previous z axis.
    pub theta: f64,
}

impl DhParams {
    #[inline]
    pub const fn new(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self { a, alpha, d, theta }
    }

    /// Same link with a different joint angle.
    #[inline]
    pub fn with_theta(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    pub fn transform(&self) -> Matrix {
        dh_transform(self.a, self.alpha, self.d, self.theta)
    }
}

/// 4x4 DH link transform `Rz(θ) · Tz(d) · Tx(a) · Rx(α)`.
/// ```text
/// | cosθ  -sinθ·cosα   sinθ·sinα  a·cosθ |
/// | sinθ   cosθ·cosα  -cosθ·sinα  a·sinθ |
/// | 0      sinα        cosα       d      |
/// | 0      0           0          1      |
/// ```
pub fn dh_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Matrix {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();
    Matrix::from([
        [ct, -st * ca, st * sa, a * ct],
        [st, ct * ca, -ct * sa, a * st],
        [0.0, sa, ca, d],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Base-to-tool transform of a serial chain: the link transforms multiplied
/// base first. An empty chain is the identity.
pub fn dh_chain(links: &[DhParams]) -> Matrix {
    links
        .iter()
        .fold(Matrix::identity(4), |acc, link| acc.mul_unchecked(&link.transform()))
}

/// Every frame along the chain, starting with the base (identity) and ending
/// with the tool. Has `links.len() + 1` entries.
pub fn chain_frames(links: &[DhParams]) -> Vec<Matrix> {
    let mut frames = Vec::with_capacity(links.len() + 1);
    frames.push(Matrix::identity(4));
    for link in links {
        let next = frames[frames.len() - 1].mul_unchecked(&link.transform());
        frames.push(next);
    }
    frames
}
