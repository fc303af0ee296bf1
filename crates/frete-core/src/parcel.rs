use rust_decimal::Decimal;

use crate::request::ShipmentItem;

/// Smallest box the carrier will quote, in centimetres.
const MIN_LENGTH_CM: u32 = 16;
const MIN_WIDTH_CM: u32 = 11;
const MIN_HEIGHT_CM: u32 = 2;

/// The aggregate package quoted to the carrier: one rate request covers the
/// whole cart, so line items are collapsed into a single box first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    pub weight_kg: Decimal,
    pub length_cm: Decimal,
    pub height_cm: Decimal,
    pub width_cm: Decimal,
}

impl Parcel {
    /// Collapses line items into one box: weights are summed per quantity,
    /// items stack along the height axis, and the footprint takes the
    /// largest item in each direction. Dimensions below the carrier
    /// minimums are raised to the minimum.
    #[must_use]
    pub fn from_items(items: &[ShipmentItem]) -> Self {
        let mut weight = Decimal::ZERO;
        let mut length = Decimal::ZERO;
        let mut width = Decimal::ZERO;
        let mut height = Decimal::ZERO;
        for item in items {
            let quantity = Decimal::from(item.quantity);
            weight += item.weight_kg * quantity;
            height += item.height_cm * quantity;
            length = length.max(item.length_cm);
            width = width.max(item.width_cm);
        }
        Self {
            weight_kg: weight,
            length_cm: length.max(Decimal::from(MIN_LENGTH_CM)),
            height_cm: height.max(Decimal::from(MIN_HEIGHT_CM)),
            width_cm: width.max(Decimal::from(MIN_WIDTH_CM)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(weight: &str, length: &str, height: &str, width: &str, quantity: u32) -> ShipmentItem {
        ShipmentItem {
            weight_kg: weight.parse().unwrap(),
            length_cm: length.parse().unwrap(),
            height_cm: height.parse().unwrap(),
            width_cm: width.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn single_item_respects_carrier_minimums() {
        let parcel = Parcel::from_items(&[item("0.3", "10", "1", "8", 1)]);
        assert_eq!(parcel.weight_kg, "0.3".parse::<Decimal>().unwrap());
        assert_eq!(parcel.length_cm, Decimal::from(16));
        assert_eq!(parcel.height_cm, Decimal::from(2));
        assert_eq!(parcel.width_cm, Decimal::from(11));
    }

    #[test]
    fn quantity_multiplies_weight_and_stacked_height() {
        let parcel = Parcel::from_items(&[item("0.5", "20", "4", "15", 3)]);
        assert_eq!(parcel.weight_kg, "1.5".parse::<Decimal>().unwrap());
        assert_eq!(parcel.height_cm, Decimal::from(12));
        assert_eq!(parcel.length_cm, Decimal::from(20));
        assert_eq!(parcel.width_cm, Decimal::from(15));
    }

    #[test]
    fn footprint_takes_largest_item_in_each_direction() {
        let parcel = Parcel::from_items(&[
            item("1", "30", "5", "12", 1),
            item("2", "18", "7", "25", 1),
        ]);
        assert_eq!(parcel.weight_kg, Decimal::from(3));
        assert_eq!(parcel.length_cm, Decimal::from(30));
        assert_eq!(parcel.width_cm, Decimal::from(25));
        assert_eq!(parcel.height_cm, Decimal::from(12));
    }

    #[test]
    fn no_items_yields_minimum_box() {
        let parcel = Parcel::from_items(&[]);
        assert_eq!(parcel.weight_kg, Decimal::ZERO);
        assert_eq!(parcel.length_cm, Decimal::from(16));
        assert_eq!(parcel.width_cm, Decimal::from(11));
        assert_eq!(parcel.height_cm, Decimal::from(2));
    }
}
