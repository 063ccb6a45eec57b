use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instances;
use crate::testing::dummies::{header_ab_binary, nominal};
use std::sync::Arc;

fn rows<const N: usize>(header: &Arc<InstanceHeader>, rows: &[([&str; N], &str)]) -> Instances {
    let mut set = Instances::new(Arc::clone(header));
    for (labels, class_label) in rows {
        let e = header
            .example_from_labels(labels.as_slice(), class_label)
            .expect("labels belong to the header");
        set.push(e).expect("example fits the header");
    }
    set
}

/// Four XOR-like rows over the A/B header: the class is "yes" exactly when
/// the indices of A and B agree.
pub fn parity_training_set() -> Instances {
    let h = header_ab_binary();
    rows(
        &h,
        &[
            (["a1", "b1"], "yes"),
            (["a1", "b2"], "no"),
            (["a2", "b1"], "no"),
            (["a2", "b2"], "yes"),
        ],
    )
}

/// The classic nominal "play tennis" relation.
pub fn weather_header() -> Arc<InstanceHeader> {
    Arc::new(InstanceHeader::new(
        "weather".into(),
        vec![
            nominal("outlook", 0, &["sunny", "overcast", "rainy"]),
            nominal("temperature", 1, &["hot", "mild", "cool"]),
            nominal("humidity", 2, &["high", "normal"]),
            nominal("windy", 3, &["TRUE", "FALSE"]),
        ],
        nominal("class", 4, &["yes", "no"]),
    ))
}

pub fn weather_training_set() -> Instances {
    let h = weather_header();
    rows(
        &h,
        &[
            (["sunny", "hot", "high", "FALSE"], "no"),
            (["sunny", "hot", "high", "TRUE"], "no"),
            (["overcast", "hot", "high", "FALSE"], "yes"),
            (["rainy", "mild", "high", "FALSE"], "yes"),
            (["rainy", "cool", "normal", "FALSE"], "yes"),
            (["rainy", "cool", "normal", "TRUE"], "no"),
            (["overcast", "cool", "normal", "TRUE"], "yes"),
            (["sunny", "mild", "high", "FALSE"], "no"),
            (["sunny", "cool", "normal", "FALSE"], "yes"),
            (["rainy", "mild", "normal", "FALSE"], "yes"),
            (["sunny", "mild", "normal", "TRUE"], "yes"),
            (["overcast", "mild", "high", "TRUE"], "yes"),
            (["overcast", "hot", "normal", "FALSE"], "yes"),
            (["rainy", "mild", "high", "TRUE"], "no"),
        ],
    )
}
