#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn metas_preserve_selection_order() {
    let files = vec![
        PickedFile { meta: FileMeta::new("b.png", "image/png", 2) },
        PickedFile { meta: FileMeta::new("a.txt", "text/plain", 1) },
    ];
    let names: Vec<String> = metas(&files).into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["b.png", "a.txt"]);
}

#[test]
fn metas_of_empty_selection_is_empty() {
    assert!(metas(&[]).is_empty());
}

#[test]
fn read_errors_name_the_file() {
    assert_eq!(FileReadError::ReadFailed("photo.png".to_owned()).to_string(), "failed to read photo.png");
    assert_eq!(FileReadError::Abandoned("photo.png".to_owned()).to_string(), "read of photo.png was abandoned");
    assert_eq!(FileReadError::ReaderUnavailable.to_string(), "file reader unavailable");
}
