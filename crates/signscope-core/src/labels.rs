//! Fixed class-label table for the pretrained traffic-sign classifier.
//!
//! Position `i` corresponds to index `i` of the model's output vector.
//! The ordering is fixed by the trained artifact and must never be changed
//! independently of it.

/// Number of output classes produced by the classifier
pub const NUM_CLASSES: usize = 43;

/// Human-readable labels, one per model output index
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Speed Limit 20",
    "Speed Limit 30",
    "Speed Limit 50",
    "Speed Limit 60",
    "Speed Limit 70",
    "Speed Limit 80",
    "End of Speed Limit 80",
    "Speed Limit 100",
    "Speed Limit 120",
    "No Passing",
    "No Passing for Vehicles over 3.5 tons",
    "Right-of-way at Intersection",
    "Priority Road",
    "Yield",
    "Stop",
    "No Vehicles",
    "Vehicles Over 3.5 Tons Prohibited",
    "No Entry",
    "General Caution",
    "Dangerous Curve Left",
    "Dangerous Curve Right",
    "Double Curve",
    "Bumpy Road",
    "Slippery Road",
    "Road Narrows on the Right",
    "Road Work",
    "Traffic Signals",
    "Pedestrians",
    "Children Crossing",
    "Bicycles Crossing",
    "Beware of Ice/Snow",
    "Wild Animals Crossing",
    "End of All Restrictions",
    "Turn Right Ahead",
    "Turn Left Ahead",
    "Ahead Only",
    "Go Straight or Right",
    "Go Straight or Left",
    "Keep Right",
    "Keep Left",
    "Roundabout Mandatory",
    "End of No Passing",
    "End of No Passing by Vehicles Over 3.5 Tons",
];

/// Look up the label for a model output index
pub fn class_name(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}
