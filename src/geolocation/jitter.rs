use crate::geolocation::consts::{ACCRA, DEFAULT_JITTER};
use crate::geolocation::errors::InvalidSpread;
use crate::geolocation::{Coordinates, Geolocator, PositionError, PositionOptions};
use async_trait::async_trait;
use rand::Rng;

/// Reports a position drawn uniformly from a small square around `base`. Useful for
/// exercising the map endpoints from a machine that has no positioning hardware.
#[derive(Debug, Clone, Copy)]
pub struct JitterGeolocator {
    base: Coordinates,
    spread: f64,
}

impl JitterGeolocator {
    pub fn new(base: Coordinates) -> Self {
        Self {
            base,
            spread: DEFAULT_JITTER,
        }
    }

    pub fn around_accra() -> Self {
        Self::new(ACCRA)
    }

    pub fn with_spread(mut self, spread: f64) -> Result<Self, InvalidSpread> {
        self.spread = valid_spread(spread)?;
        Ok(self)
    }
}

/// `rand` cannot sample a range bounded by NaN or infinity.
pub fn valid_spread(spread: f64) -> Result<f64, InvalidSpread> {
    if spread.is_finite() && spread >= 0.0 {
        Ok(spread)
    } else {
        Err(InvalidSpread(spread))
    }
}

#[async_trait]
impl Geolocator for JitterGeolocator {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionError> {
        let (delta_lat, delta_lng) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(-self.spread..=self.spread),
                rng.gen_range(-self.spread..=self.spread),
            )
        };
        Ok(Coordinates::new(
            self.base.latitude + delta_lat,
            self.base.longitude + delta_lng,
        ))
    }
}
