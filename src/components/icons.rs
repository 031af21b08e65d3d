//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuArrowUp as Parent, LuBookOpen as FilePdf,
        LuBraces as FileData, LuChevronRight as ChevronRight, LuCode as FileCode,
        LuDownload as Download, LuEye as Preview, LuFile as File, LuFileText as FileDoc,
        LuFileText as FileText, LuFilm as FileVideo, LuFolder as Folder, LuGlobe as FileWeb,
        LuHourglass as Loading, LuHouse as Home, LuImage as FileImage, LuInbox as Empty,
        LuMusic as FileAudio, LuPalette as FileStyle, LuSettings as FileExec,
        LuTable as FileSheet, LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUpCircle as Parent, BsBraces as FileData, BsChevronRight as ChevronRight,
        BsDownload as Download, BsExclamationTriangle as Warning, BsEye as Preview,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkSpreadsheet as FileSheet,
        BsFileEarmarkText as FileText, BsFileEarmarkWord as FileDoc,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsGearFill as FileExec,
        BsGlobe as FileWeb, BsHourglassSplit as Loading, BsHouseFill as Home, BsInbox as Empty,
        BsPalette as FileStyle, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(PARENT, Parent);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_DOC, FileDoc);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_EXEC, FileExec);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_WEB, FileWeb);
themed_icon!(FILE_STYLE, FileStyle);
themed_icon!(FILE_DATA, FileData);
themed_icon!(FILE_SHEET, FileSheet);
themed_icon!(DOWNLOAD, Download);
themed_icon!(PREVIEW, Preview);
themed_icon!(CLOSE, Close);
themed_icon!(WARNING, Warning);
themed_icon!(LOADING, Loading);
themed_icon!(EMPTY, Empty);

/// Card icon for a file category.
pub fn file_icon(icon: FileIcon) -> Icon {
    match icon {
        FileIcon::Pdf => FILE_PDF,
        FileIcon::Document => FILE_DOC,
        FileIcon::Text => FILE_TEXT,
        FileIcon::Image => FILE_IMAGE,
        FileIcon::Video => FILE_VIDEO,
        FileIcon::Audio => FILE_AUDIO,
        FileIcon::Archive => FILE_ARCHIVE,
        FileIcon::Executable => FILE_EXEC,
        FileIcon::Code => FILE_CODE,
        FileIcon::Web => FILE_WEB,
        FileIcon::Style => FILE_STYLE,
        FileIcon::Data => FILE_DATA,
        FileIcon::Spreadsheet => FILE_SHEET,
        FileIcon::Generic => FILE,
    }
}
