//! Static event content: photo listings and speakers.

use std::path::Path;

use fastrand::Rng;
use fervor_carousel::CardContent;

/// Photo numbers in the `Fervor-1` folder, files are `DSC<number>.jpg`.
const FERVOR_1_PHOTOS: [&str; 111] = [
    "00001", "00006", "00008", "00009", "00010", "00011", "00013", "00016",
    "00019", "00020", "00023", "00025", "00027", "00030", "00031", "00033",
    "00034", "00036", "00037", "00043", "00044", "00047", "00048", "00049",
    "00050", "00051", "00054", "00056", "00057", "00061", "00062", "00072",
    "00083", "00089", "00093", "00095", "00104", "00105", "00107", "00112",
    "00122", "00125", "00129", "00135", "00167", "00171", "09813", "09814",
    "09817", "09818", "09821", "09828", "09830", "09832", "09833", "09840",
    "09848", "09854", "09855", "09856", "09857", "09865", "09869", "09872",
    "09878", "09886", "09888", "09893", "09894", "09896", "09897", "09900",
    "09901", "09902", "09905", "09907", "09909", "09912", "09918", "09919",
    "09920", "09926", "09927", "09929", "09930", "09931", "09933", "09934",
    "09937", "09940", "09944", "09949", "09954", "09957", "09961", "09962",
    "09963", "09965", "09967", "09969", "09972", "09974", "09976", "09979",
    "09981", "09982", "09992", "09995", "09996", "09997", "09999",
];

/// Photo numbers in the `Fervor-2` folder.
const FERVOR_2_PHOTOS: [&str; 28] = [
    "00189", "00192", "00194", "00195", "00198", "00203", "00206", "00207",
    "00209", "00211", "00214", "00217", "00232", "00235", "00236", "00239",
    "00244", "00249", "00252", "00255", "00257", "00260", "00261", "00263",
    "00268", "00272", "00274", "00276",
];

/// Known photo folders and their contents.
const PHOTO_FOLDERS: [(&str, &[&str]); 2] = [
    ("Fervor-1", &FERVOR_1_PHOTOS),
    ("Fervor-2", &FERVOR_2_PHOTOS),
];

/// A photo from a past edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Site-relative path, `/images/<folder>/<file>`.
    pub src: String,
    pub alt: String,
    pub folder: &'static str,
}

impl GalleryImage {
    fn new(folder: &'static str, number: &str) -> Self {
        let file = format!("DSC{number}.jpg");
        Self {
            src: format!("/images/{folder}/{file}"),
            alt: format!("Fervor memory - {file}"),
            folder,
        }
    }

    /// File name without the folder.
    pub fn file_name(&self) -> &str {
        self.src.rsplit('/').next().unwrap_or(&self.src)
    }
}

impl CardContent for GalleryImage {
    fn title(&self) -> &str {
        self.file_name()
    }

    fn body(&self) -> Vec<String> {
        vec![String::new(), self.folder.to_string(), self.src.clone()]
    }
}

/// A preaching session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub role: &'static str,
    pub time: &'static str,
    /// Ministry the speaker serves in.
    pub ministry: &'static str,
    pub talk: &'static str,
}

impl CardContent for Speaker {
    fn title(&self) -> &str {
        self.role
    }

    fn body(&self) -> Vec<String> {
        vec![
            String::new(),
            self.name.to_string(),
            self.ministry.to_string(),
            self.time.to_string(),
            String::new(),
            format!("\"{}\"", self.talk),
        ]
    }
}

pub const SPEAKERS: [Speaker; 3] = [
    Speaker {
        name: "SANDRA VILLAMIZAR",
        role: "Primera Sesión",
        time: "3:00 PM - 4:30 PM",
        ministry: "Esposa de pastor",
        talk: "Destilando en lo secreto: Cuando Dios prepara el aceite",
    },
    Speaker {
        name: "NABONASAR PADAUÍ",
        role: "Segunda Sesión",
        time: "4:45 PM - 6:15 PM",
        ministry: "Secretario de directiva distrital",
        talk: "Marcado por el cielo: El día del derramamiento",
    },
    Speaker {
        name: "LUIS FERNANDO VÁSQUEZ",
        role: "Tercera Sesión",
        time: "6:30 PM - 8:00 PM",
        ministry: "Pastor",
        talk: "El peso del perfume: Frutos que huelen a llamado",
    },
];

/// Gather the photos of `folders`, shuffle them and keep at most `max`.
///
/// Unknown folders are skipped.
pub fn gallery_images(folders: &[String], max: usize, rng: &mut Rng) -> Vec<GalleryImage> {
    let mut images: Vec<GalleryImage> = Vec::new();
    for name in folders {
        match PHOTO_FOLDERS.iter().find(|(folder, _)| folder == name) {
            Some((folder, photos)) => {
                images.extend(photos.iter().map(|n| GalleryImage::new(folder, n)));
            }
            None => tracing::warn!(folder = %name, "unknown photo folder"),
        }
    }

    rng.shuffle(&mut images);
    images.truncate(max);
    images
}

/// Drop images whose file is missing under `assets_root`.
pub fn retain_available(images: Vec<GalleryImage>, assets_root: &Path) -> Vec<GalleryImage> {
    images
        .into_iter()
        .filter(|image| {
            let path = assets_root.join(image.src.trim_start_matches('/'));
            let found = path.is_file();
            if !found {
                tracing::debug!(path = %path.display(), "photo missing, hiding card");
            }
            found
        })
        .collect()
}
