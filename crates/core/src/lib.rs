//! Gaze quadrant estimation from face-landmarker blend shapes.
//!
//! The face-landmark model, the camera and the canvas live behind ports
//! ([`FaceLandmarker`](landmarking::domain::face_landmarker::FaceLandmarker),
//! [`FrameSource`](video::domain::frame_source::FrameSource),
//! [`LandmarkDrawer`](rendering::face_mesh_overlay::LandmarkDrawer)); this
//! crate owns the per-frame loop and the quadrant heuristic.

pub mod blendshapes {
    pub mod domain {
        pub mod blend_shape;
        pub mod blend_shape_category;
        pub mod face_blend_shapes;
    }
}

pub mod gaze {
    pub mod domain {
        pub mod gaze_axes;
        pub mod gaze_classifier;
        pub mod gaze_quadrant;
        pub mod quadrant_classifier;
        pub mod quadrant_publisher;
    }
    pub mod infrastructure {
        pub mod channel_quadrant_publisher;
        pub mod quadrant_slot;
    }
}

pub mod landmarking {
    pub mod domain {
        pub mod face_landmarker;
        pub mod landmarker_options;
        pub mod landmarker_result;
    }
    pub mod infrastructure {
        pub mod recorded_landmarker;
    }
}

pub mod pipeline {
    pub mod pipeline_logger;
    pub mod track_gaze_use_case;
}

pub mod rendering {
    pub mod blend_shape_list;
    pub mod face_mesh_overlay;
}

pub mod shared {
    pub mod constants;
    pub mod frame;
    pub mod recorded_session;
    pub mod settings;
    pub mod video_metadata;
}

pub mod video {
    pub mod domain {
        pub mod frame_source;
    }
    pub mod infrastructure {
        pub mod recorded_frame_source;
    }
}
