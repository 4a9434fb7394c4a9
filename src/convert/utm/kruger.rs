use crate::constants::{EQUATORIAL_RADIUS, FLATTENING};
use std::sync::LazyLock;

/// Series parameters of the WGS84 ellipsoid, computed once
pub(crate) static WGS84: LazyLock<KrugerSeries> =
    LazyLock::new(|| KrugerSeries::new(EQUATORIAL_RADIUS, FLATTENING));

/// Ellipsoid parameters and order 8 Krüger coefficients
///
/// `alpha[j]` and `beta[j]` are the coefficients of the `2(j + 1)` harmonics,
/// i.e. Karney's one-based α₁..α₈ and β₁..β₈ shifted down by one index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KrugerSeries {
    pub eccentricity: f64,
    /// Rectifying radius `A`; `2πA` is the circumference of a meridian
    pub rectifying_radius: f64,
    /// Forward series (geographic to transverse Mercator)
    pub alpha: [f64; 8],
    /// Inverse series (transverse Mercator to geographic)
    pub beta: [f64; 8],
}

impl KrugerSeries {
    pub fn new(equatorial_radius: f64, flattening: f64) -> Self {
        let eccentricity = (flattening * (2.0 - flattening)).sqrt();

        // third flattening
        let n = flattening / (2.0 - flattening);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;
        let n7 = n6 * n;
        let n8 = n7 * n;

        let rectifying_radius = equatorial_radius / (1.0 + n)
            * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0 + 25.0 * n8 / 16_384.0);

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0 - 127.0 * n5 / 288.0
                + 7_891.0 * n6 / 37_800.0
                + 72_161.0 * n7 / 387_072.0
                - 18_975_107.0 * n8 / 50_803_200.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1_440.0 + 281.0 * n5 / 630.0
                - 1_983_433.0 * n6 / 1_935_360.0
                + 13_769.0 * n7 / 28_800.0
                + 148_003_883.0 * n8 / 174_182_400.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0 + 15_061.0 * n5 / 26_880.0
                + 167_603.0 * n6 / 181_440.0
                - 67_102_379.0 * n7 / 29_030_400.0
                + 79_682_431.0 * n8 / 79_833_600.0,
            49_561.0 * n4 / 161_280.0 - 179.0 * n5 / 168.0 + 6_601_661.0 * n6 / 7_257_600.0
                + 97_445.0 * n7 / 49_896.0
                - 40_176_129_013.0 * n8 / 7_664_025_600.0,
            34_729.0 * n5 / 80_640.0 - 3_418_889.0 * n6 / 1_995_840.0
                + 14_644_087.0 * n7 / 9_123_840.0
                + 2_605_413_599.0 * n8 / 622_702_080.0,
            212_378_941.0 * n6 / 319_334_400.0 - 30_705_481.0 * n7 / 10_378_368.0
                + 175_214_326_799.0 * n8 / 58_118_860_800.0,
            1_522_256_789.0 * n7 / 1_383_782_400.0 - 16_759_934_899.0 * n8 / 3_113_510_400.0,
            1_424_729_850_961.0 * n8 / 743_921_418_240.0,
        ];

        let beta = [
            -n / 2.0 + 2.0 * n2 / 3.0 - 37.0 * n3 / 96.0 + n4 / 360.0 + 81.0 * n5 / 512.0
                - 96_199.0 * n6 / 604_800.0
                + 5_406_467.0 * n7 / 38_707_200.0
                - 7_944_359.0 * n8 / 67_737_600.0,
            -n2 / 48.0 - n3 / 15.0 + 437.0 * n4 / 1_440.0 - 46.0 * n5 / 105.0
                + 111_871.0 * n6 / 387_072.0
                - 51_841.0 * n7 / 1_209_600.0
                - 24_749_483.0 * n8 / 348_364_800.0,
            -17.0 * n3 / 480.0 + 37.0 * n4 / 840.0 + 209.0 * n5 / 4_480.0
                - 5_569.0 * n6 / 90_720.0
                - 9_261_899.0 * n7 / 58_060_800.0
                + 6_457_463.0 * n8 / 17_740_800.0,
            -4_397.0 * n4 / 161_280.0 + 11.0 * n5 / 504.0 + 830_251.0 * n6 / 7_257_600.0
                - 466_511.0 * n7 / 2_494_800.0
                - 324_154_477.0 * n8 / 7_664_025_600.0,
            -4_583.0 * n5 / 161_280.0 + 108_847.0 * n6 / 3_991_680.0
                + 8_005_831.0 * n7 / 63_866_880.0
                - 22_894_433.0 * n8 / 124_540_416.0,
            -20_648_693.0 * n6 / 638_668_800.0 + 16_363_163.0 * n7 / 518_918_400.0
                + 2_204_645_983.0 * n8 / 12_915_302_400.0,
            -219_941_297.0 * n7 / 5_535_129_600.0 + 497_323_811.0 * n8 / 12_454_041_600.0,
            -191_773_887_257.0 * n8 / 3_719_607_091_200.0,
        ];

        Self {
            eccentricity,
            rectifying_radius,
            alpha,
            beta,
        }
    }
}

/// Add the trigonometric series of `coefficients` to `(xi, eta)`
///
/// Returns `xi + Σ c·sin(2jξ)·cosh(2jη)` and `eta + Σ c·cos(2jξ)·sinh(2jη)`
/// for j = 1..=8. The forward projection passes α, the inverse passes β.
pub(crate) fn apply_series(coefficients: &[f64; 8], xi: f64, eta: f64) -> (f64, f64) {
    let mut xi_sum = xi;
    for (j, coefficient) in coefficients.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi_sum += coefficient * (k * xi).sin() * (k * eta).cosh();
    }

    let mut eta_sum = eta;
    for (j, coefficient) in coefficients.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        eta_sum += coefficient * (k * xi).cos() * (k * eta).sinh();
    }

    (xi_sum, eta_sum)
}
