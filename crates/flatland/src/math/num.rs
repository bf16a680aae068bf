use super::{pi, tau, FloatNum};

pub(crate) fn is_same_sign(v1: FloatNum, v2: FloatNum) -> bool {
    (v1.is_sign_positive() && v2.is_sign_positive())
        || (v1.is_sign_negative() && v2.is_sign_negative())
}

/// wrap an angle into (-π, π]
pub fn wrap_angle(rad: FloatNum) -> FloatNum {
    let mut rad = rad % tau();
    if rad <= -pi() {
        rad += tau();
    } else if rad > pi() {
        rad -= tau();
    }
    rad
}
