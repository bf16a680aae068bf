pub mod num;
pub mod vector;

pub type FloatNum = f64;

#[inline]
pub const fn pi() -> FloatNum {
    std::f64::consts::PI
}

#[inline]
pub const fn tau() -> FloatNum {
    std::f64::consts::TAU
}

// conversion factors are kept at the precision drivers and saved scenarios were written with
const DEGREES_PER_RADIAN: FloatNum = 57.2957795131;
const RADIANS_PER_DEGREE: FloatNum = 0.01745329251;
const RADIANS_PER_REVOLUTION: FloatNum = 6.28318530718;
const DEGREES_PER_REVOLUTION: FloatNum = 360.;

#[inline]
pub fn radians_to_degrees(radians: FloatNum) -> FloatNum {
    radians * DEGREES_PER_RADIAN
}

#[inline]
pub fn degrees_to_radians(degrees: FloatNum) -> FloatNum {
    degrees * RADIANS_PER_DEGREE
}

#[inline]
pub fn radians_to_revolutions(radians: FloatNum) -> FloatNum {
    radians / RADIANS_PER_REVOLUTION
}

#[inline]
pub fn revolutions_to_radians(revolutions: FloatNum) -> FloatNum {
    revolutions * RADIANS_PER_REVOLUTION
}

#[inline]
pub fn revolutions_to_degrees(revolutions: FloatNum) -> FloatNum {
    revolutions * DEGREES_PER_REVOLUTION
}

#[inline]
pub fn degrees_to_revolutions(degrees: FloatNum) -> FloatNum {
    degrees / DEGREES_PER_REVOLUTION
}
