//! Regional-system gated arithmetic.
//!
//! These methods compute exactly what `*` and `/` compute, but only compile when **both** operand
//! unit types belong to the named regional system (or system combination). They let call sites
//! assert "this formula stays inside metric" and get a compile error the moment a foreign unit
//! sneaks in. Markers propagate through composite shapes, so gated results remain gateable.
//!
//! ```rust
//! use mensura_core::length::Meters;
//! use mensura_core::time::Seconds;
//!
//! let speed = Meters::new(10.0).div_metric(Seconds::new(2.0));
//! assert_eq!(speed.value(), 5.0);
//! ```
//!
//! An operand outside the system is rejected at compile time:
//!
//! ```compile_fail
//! use mensura_core::length::{Inches, Meters};
//!
//! // Inch is imperial only, so a metric-gated product does not compile.
//! let _ = Meters::new(1.0).times_metric(Inches::new(1.0));
//! ```

use crate::measurement::Measurement;
use crate::system::{
    UsedInImperial, UsedInMetric, UsedInMetricAndImperial, UsedInMetricAndUKImperial,
    UsedInMetricAndUSCustomary, UsedInUKImperial, UsedInUSCustomary,
};
use crate::unit::{Divided, Multiplied, Unit};

macro_rules! regional_ops {
    ($($times:ident, $div:ident, $marker:ident, $desc:literal;)+) => {
        impl<L: Unit> Measurement<L> {
            $(
                #[doc = concat!("Product of two measurements whose units both belong to ", $desc, ".")]
                #[doc = ""]
                #[doc = "Identical to `*` apart from the system gate."]
                #[inline]
                pub fn $times<R>(
                    self,
                    rhs: Measurement<R>,
                ) -> Measurement<Multiplied<L::Wrapped, R::Wrapped>>
                where
                    L: $marker,
                    R: Unit + $marker,
                {
                    self * rhs
                }

                #[doc = concat!("Quotient of two measurements whose units both belong to ", $desc, ".")]
                #[doc = ""]
                #[doc = "Identical to `/` apart from the system gate."]
                #[inline]
                pub fn $div<R>(
                    self,
                    rhs: Measurement<R>,
                ) -> Measurement<Divided<L::Wrapped, R::Wrapped>>
                where
                    L: $marker,
                    R: Unit + $marker,
                {
                    self / rhs
                }
            )+
        }
    };
}

regional_ops! {
    times_metric, div_metric, UsedInMetric, "the metric system";
    times_uk_imperial, div_uk_imperial, UsedInUKImperial, "the UK imperial system";
    times_us_customary, div_us_customary, UsedInUSCustomary, "the US customary system";
    times_imperial, div_imperial, UsedInImperial, "both imperial systems";
    times_metric_and_imperial, div_metric_and_imperial, UsedInMetricAndImperial, "all three systems";
    times_metric_and_uk_imperial, div_metric_and_uk_imperial, UsedInMetricAndUKImperial, "the metric and UK imperial systems";
    times_metric_and_us_customary, div_metric_and_us_customary, UsedInMetricAndUSCustomary, "the metric and US customary systems";
}
