//! Right panel (inspector) model
//!
//! Presentation depends only on how many photos are selected. A single
//! selection shows the detail of the record that is actually selected.

use crate::photo::{format_short_date, ColorTag, PhotoId, PhotoRecord};
use crate::selection::SelectionState;

/// Selection arity driving the right panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionArity {
    Empty,
    Single,
    Multiple(usize),
}

impl SelectionArity {
    pub fn of(len: usize) -> Self {
        match len {
            0 => SelectionArity::Empty,
            1 => SelectionArity::Single,
            n => SelectionArity::Multiple(n),
        }
    }
}

/// Camera metadata shown in the 元数据 section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    pub camera: &'static str,
    pub lens: &'static str,
    pub shutter: &'static str,
    pub aperture: &'static str,
    pub iso: &'static str,
    pub gps: &'static str,
}

const CAMERA_PROFILES: [CameraInfo; 4] = [
    CameraInfo {
        camera: "Canon EOS R5",
        lens: "RF 50mm f/1.2L",
        shutter: "1/125",
        aperture: "f/2.8",
        iso: "400",
        gps: "31.2304° N, 121.4737° E",
    },
    CameraInfo {
        camera: "Sony α7 IV",
        lens: "FE 24-70mm F2.8 GM II",
        shutter: "1/250",
        aperture: "f/4",
        iso: "200",
        gps: "39.9042° N, 116.4074° E",
    },
    CameraInfo {
        camera: "Nikon Z 8",
        lens: "NIKKOR Z 85mm f/1.8 S",
        shutter: "1/500",
        aperture: "f/1.8",
        iso: "100",
        gps: "30.2741° N, 120.1551° E",
    },
    CameraInfo {
        camera: "Fujifilm X-T5",
        lens: "XF 33mm F1.4 R LM WR",
        shutter: "1/60",
        aperture: "f/5.6",
        iso: "800",
        gps: "22.5431° N, 114.0579° E",
    },
];

/// Everything the single-selection form displays
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDetail {
    pub id: PhotoId,
    pub name: String,
    pub size: String,
    pub kind: String,
    pub resolution: String,
    pub modified: String,
    pub rating: u8,
    pub tag: ColorTag,
    pub camera: CameraInfo,
}

impl PhotoDetail {
    pub fn from_record(record: &PhotoRecord) -> Self {
        let profile = (record.id.0 as usize) % CAMERA_PROFILES.len();

        Self {
            id: record.id,
            name: record.name.clone(),
            size: record.size.to_string(),
            kind: record.kind.clone(),
            resolution: record.resolution.clone(),
            modified: format_short_date(record.modified),
            rating: record.rating,
            tag: record.tag,
            camera: CAMERA_PROFILES[profile].clone(),
        }
    }
}

/// What the right panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum Inspector {
    Empty,
    /// `None` when the selected id is not in the collection (renders blank)
    Single(Option<PhotoDetail>),
    Multiple(usize),
}

impl Inspector {
    pub fn for_selection(selection: &SelectionState, records: &[PhotoRecord]) -> Self {
        match SelectionArity::of(selection.len()) {
            SelectionArity::Empty => Inspector::Empty,
            SelectionArity::Multiple(n) => Inspector::Multiple(n),
            SelectionArity::Single => {
                let detail = selection
                    .single()
                    .and_then(|id| records.iter().find(|r| r.id == id))
                    .map(PhotoDetail::from_record);
                Inspector::Single(detail)
            }
        }
    }
}

/// Local, never persisted edits made in the single-selection form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorEdits {
    record: Option<PhotoId>,
    rating: Option<u8>,
    pub note: String,
}

impl InspectorEdits {
    /// Drop edits made for another record
    pub fn follow(&mut self, id: Option<PhotoId>) {
        if self.record != id {
            *self = Self {
                record: id,
                ..Self::default()
            };
        }
    }

    /// Edited rating, falling back to the record's own
    pub fn rating(&self, detail: Option<&PhotoDetail>) -> u8 {
        self.rating
            .or_else(|| detail.map(|d| d.rating))
            .unwrap_or(0)
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating.min(PhotoRecord::MAX_RATING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockPhotoRepository, PhotoRepository};

    fn records() -> Vec<PhotoRecord> {
        MockPhotoRepository::new(24, Some(8)).list_records().unwrap()
    }

    #[test]
    fn test_arity_boundaries() {
        assert_eq!(SelectionArity::of(0), SelectionArity::Empty);
        assert_eq!(SelectionArity::of(1), SelectionArity::Single);
        assert_eq!(SelectionArity::of(2), SelectionArity::Multiple(2));
    }

    #[test]
    fn test_inspector_states() {
        let records = records();
        let mut selection = SelectionState::new();
        assert_eq!(Inspector::for_selection(&selection, &records), Inspector::Empty);

        selection.toggle(PhotoId(7));
        match Inspector::for_selection(&selection, &records) {
            Inspector::Single(Some(detail)) => {
                assert_eq!(detail.id, PhotoId(7));
                assert_eq!(detail.name, "photo_007.jpg");
            }
            other => panic!("expected single detail, got {:?}", other),
        }

        selection.toggle(PhotoId(9));
        assert_eq!(Inspector::for_selection(&selection, &records), Inspector::Multiple(2));
    }

    #[test]
    fn test_unknown_selection_renders_blank() {
        let mut selection = SelectionState::new();
        selection.toggle(PhotoId(3));
        assert_eq!(Inspector::for_selection(&selection, &[]), Inspector::Single(None));
    }

    #[test]
    fn test_detail_matches_record() {
        let records = records();
        let record = &records[11];
        let detail = PhotoDetail::from_record(record);
        assert_eq!(detail.size, record.size.to_string());
        assert_eq!(detail.rating, record.rating);
        assert_eq!(detail.modified, record.modified_display());
        assert_eq!(detail, PhotoDetail::from_record(record));
    }

    #[test]
    fn test_edits_reset_on_other_record() {
        let mut edits = InspectorEdits::default();
        edits.follow(Some(PhotoId(1)));
        edits.set_rating(2);
        edits.note.push_str("keep");

        edits.follow(Some(PhotoId(1)));
        assert_eq!(edits.rating(None), 2);
        assert_eq!(edits.note, "keep");

        edits.follow(Some(PhotoId(2)));
        assert_eq!(edits.rating(None), 0);
        assert!(edits.note.is_empty());
    }

    #[test]
    fn test_edited_rating_overrides_record() {
        let detail = PhotoDetail::from_record(&records()[0]);
        let mut edits = InspectorEdits::default();
        assert_eq!(edits.rating(Some(&detail)), detail.rating);

        edits.set_rating(9);
        assert_eq!(edits.rating(Some(&detail)), 5);
    }
}
