#[cfg(test)]
#[path = "../../tests/unit/distances/geodesic_test.rs"]
mod geodesic_test;

use crate::grid::GeoPoint;

const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.;
const WGS84_FLATTENING: f64 = 1. / 298.257_223_563;
const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Returns geodesic distance in metres between two points on WGS-84 ellipsoid.
/// Falls back to haversine distance when Vincenty's method does not converge which happens for
/// nearly antipodal points.
pub fn geodesic_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    if from.lon == to.lon && from.lat == to.lat {
        return 0.;
    }

    vincenty_distance(from, to).unwrap_or_else(|| haversine_distance(from, to))
}

/// Returns great-circle distance in metres using mean earth radius.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon - from.lon).to_radians();

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);

    2. * MEAN_EARTH_RADIUS * h.sqrt().min(1.).asin()
}

/// Vincenty's inverse formula, returns `None` if iterations do not converge.
fn vincenty_distance(from: &GeoPoint, to: &GeoPoint) -> Option<f64> {
    let a = WGS84_SEMI_MAJOR_AXIS;
    let f = WGS84_FLATTENING;
    let b = (1. - f) * a;

    let l = (to.lon - from.lon).to_radians();
    let u1 = ((1. - f) * from.lat.to_radians().tan()).atan();
    let u2 = ((1. - f) * to.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2) + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2)).sqrt();
        if sin_sigma == 0. {
            return Some(0.);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1. - sin_alpha * sin_alpha;
        // NOTE equatorial line: cos_sq_alpha is zero
        let cos_2sigma_m = if cos_sq_alpha != 0. { cos_sigma - 2. * sin_u1 * sin_u2 / cos_sq_alpha } else { 0. };
        let c = f / 16. * cos_sq_alpha * (4. + f * (4. - 3. * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1. - c)
                * f
                * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1. + 2. * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
            let big_a = 1. + u_sq / 16384. * (4096. + u_sq * (-768. + u_sq * (320. - 175. * u_sq)));
            let big_b = u_sq / 1024. * (256. + u_sq * (-128. + u_sq * (74. - 47. * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.
                        * (cos_sigma * (-1. + 2. * cos_2sigma_m.powi(2))
                            - big_b / 6.
                                * cos_2sigma_m
                                * (-3. + 4. * sin_sigma.powi(2))
                                * (-3. + 4. * cos_2sigma_m.powi(2))));

            return Some(b * big_a * (sigma - delta_sigma));
        }
    }

    None
}
