//! The face landmarker's 52 blend-shape channels, in documented output order.

/// Category names indexed by model output position.
const NAMES: [&str; 52] = [
    "_neutral",
    "browDownLeft",
    "browDownRight",
    "browInnerUp",
    "browOuterUpLeft",
    "browOuterUpRight",
    "cheekPuff",
    "cheekSquintLeft",
    "cheekSquintRight",
    "eyeBlinkLeft",
    "eyeBlinkRight",
    "eyeLookDownLeft",
    "eyeLookDownRight",
    "eyeLookInLeft",
    "eyeLookInRight",
    "eyeLookOutLeft",
    "eyeLookOutRight",
    "eyeLookUpLeft",
    "eyeLookUpRight",
    "eyeSquintLeft",
    "eyeSquintRight",
    "eyeWideLeft",
    "eyeWideRight",
    "jawForward",
    "jawLeft",
    "jawOpen",
    "jawRight",
    "mouthClose",
    "mouthDimpleLeft",
    "mouthDimpleRight",
    "mouthFrownLeft",
    "mouthFrownRight",
    "mouthFunnel",
    "mouthLeft",
    "mouthLowerDownLeft",
    "mouthLowerDownRight",
    "mouthPressLeft",
    "mouthPressRight",
    "mouthPucker",
    "mouthRight",
    "mouthRollLower",
    "mouthRollUpper",
    "mouthShrugLower",
    "mouthShrugUpper",
    "mouthSmileLeft",
    "mouthSmileRight",
    "mouthStretchLeft",
    "mouthStretchRight",
    "mouthUpperUpLeft",
    "mouthUpperUpRight",
    "noseSneerLeft",
    "noseSneerRight",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum BlendShape {
    Neutral = 0,
    BrowDownLeft,
    BrowDownRight,
    BrowInnerUp,
    BrowOuterUpLeft,
    BrowOuterUpRight,
    CheekPuff,
    CheekSquintLeft,
    CheekSquintRight,
    EyeBlinkLeft,
    EyeBlinkRight,
    EyeLookDownLeft,
    EyeLookDownRight,
    EyeLookInLeft,
    EyeLookInRight,
    EyeLookOutLeft,
    EyeLookOutRight,
    EyeLookUpLeft,
    EyeLookUpRight,
    EyeSquintLeft,
    EyeSquintRight,
    EyeWideLeft,
    EyeWideRight,
    JawForward,
    JawLeft,
    JawOpen,
    JawRight,
    MouthClose,
    MouthDimpleLeft,
    MouthDimpleRight,
    MouthFrownLeft,
    MouthFrownRight,
    MouthFunnel,
    MouthLeft,
    MouthLowerDownLeft,
    MouthLowerDownRight,
    MouthPressLeft,
    MouthPressRight,
    MouthPucker,
    MouthRight,
    MouthRollLower,
    MouthRollUpper,
    MouthShrugLower,
    MouthShrugUpper,
    MouthSmileLeft,
    MouthSmileRight,
    MouthStretchLeft,
    MouthStretchRight,
    MouthUpperUpLeft,
    MouthUpperUpRight,
    NoseSneerLeft,
    NoseSneerRight,
}

impl BlendShape {
    pub const COUNT: usize = NAMES.len();

    pub const ALL: [BlendShape; 52] = [
        BlendShape::Neutral,
        BlendShape::BrowDownLeft,
        BlendShape::BrowDownRight,
        BlendShape::BrowInnerUp,
        BlendShape::BrowOuterUpLeft,
        BlendShape::BrowOuterUpRight,
        BlendShape::CheekPuff,
        BlendShape::CheekSquintLeft,
        BlendShape::CheekSquintRight,
        BlendShape::EyeBlinkLeft,
        BlendShape::EyeBlinkRight,
        BlendShape::EyeLookDownLeft,
        BlendShape::EyeLookDownRight,
        BlendShape::EyeLookInLeft,
        BlendShape::EyeLookInRight,
        BlendShape::EyeLookOutLeft,
        BlendShape::EyeLookOutRight,
        BlendShape::EyeLookUpLeft,
        BlendShape::EyeLookUpRight,
        BlendShape::EyeSquintLeft,
        BlendShape::EyeSquintRight,
        BlendShape::EyeWideLeft,
        BlendShape::EyeWideRight,
        BlendShape::JawForward,
        BlendShape::JawLeft,
        BlendShape::JawOpen,
        BlendShape::JawRight,
        BlendShape::MouthClose,
        BlendShape::MouthDimpleLeft,
        BlendShape::MouthDimpleRight,
        BlendShape::MouthFrownLeft,
        BlendShape::MouthFrownRight,
        BlendShape::MouthFunnel,
        BlendShape::MouthLeft,
        BlendShape::MouthLowerDownLeft,
        BlendShape::MouthLowerDownRight,
        BlendShape::MouthPressLeft,
        BlendShape::MouthPressRight,
        BlendShape::MouthPucker,
        BlendShape::MouthRight,
        BlendShape::MouthRollLower,
        BlendShape::MouthRollUpper,
        BlendShape::MouthShrugLower,
        BlendShape::MouthShrugUpper,
        BlendShape::MouthSmileLeft,
        BlendShape::MouthSmileRight,
        BlendShape::MouthStretchLeft,
        BlendShape::MouthStretchRight,
        BlendShape::MouthUpperUpLeft,
        BlendShape::MouthUpperUpRight,
        BlendShape::NoseSneerLeft,
        BlendShape::NoseSneerRight,
    ];

    /// Position of this channel in the model's output list.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The model's `categoryName` for this channel.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

impl std::fmt::Display for BlendShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
