//! Roll/pitch/yaw angles in the intrinsic ZYX convention.

use crate::tolerance::GIMBAL_LOCK_THRESHOLD;
use crate::{Error, Matrix, Result, Shape};

/// Euler angles in radians. The rotation they describe is
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles {
    #[inline]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn to_matrix(self) -> Matrix {
        rotation_from_euler(self.roll, self.pitch, self.yaw)
    }

    pub fn from_matrix(r: &Matrix) -> Result<Self> {
        euler_from_rotation(r)
    }
}

/// 3x3 rotation `Rz(yaw) * Ry(pitch) * Rx(roll)`.
pub fn rotation_from_euler(roll: f64, pitch: f64, yaw: f64) -> Matrix {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    Matrix::from([
        [cy * cp, cy * sp * sr - sy * cr, cy * sp * cr + sy * sr],
        [sy * cp, sy * sp * sr + cy * cr, sy * sp * cr - cy * sr],
        [-sp, cp * sr, cp * cr],
    ])
}

/// Recover ZYX Euler angles from a 3x3 rotation.
///
/// Near pitch = ±90° roll and yaw rotate about the same axis and only their
/// combination is determined. In that case yaw is fixed to 0 and roll
/// absorbs the rest: the rotation round-trips, the original yaw does not.
pub fn euler_from_rotation(r: &Matrix) -> Result<EulerAngles> {
    if r.dimensions() != (3, 3) {
        return Err(Error::mismatch("euler from rotation", r.shape(), Shape::new(3, 3)));
    }
    let m = |i, j| r.get(i, j);
    let sy = m(0, 0).hypot(m(1, 0));
    let pitch = (-m(2, 0)).atan2(sy);

    if sy >= GIMBAL_LOCK_THRESHOLD {
        Ok(EulerAngles {
            roll: m(2, 1).atan2(m(2, 2)),
            pitch,
            yaw: m(1, 0).atan2(m(0, 0)),
        })
    } else {
        tracing::trace!(sy, "gimbal lock, yaw fixed to zero");
        Ok(EulerAngles {
            roll: (-m(1, 2)).atan2(m(1, 1)),
            pitch,
            yaw: 0.0,
        })
    }
}
