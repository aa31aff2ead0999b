//! Menu bar layout

use crate::CommandId;

/// One top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    /// Localization key of the title
    pub title_key: &'static str,
    /// Access key shown after the title, e.g. `F` in 文件(F)
    pub mnemonic: char,
    pub items: &'static [&'static str],
}

pub const MENUS: [Menu; 6] = [
    Menu {
        title_key: "menu-file",
        mnemonic: 'F',
        items: &[
            CommandId::FILE_NEW_FOLDER,
            CommandId::FILE_IMPORT,
            CommandId::FILE_EXPORT,
            CommandId::FILE_BATCH_RENAME,
        ],
    },
    Menu {
        title_key: "menu-edit",
        mnemonic: 'E',
        items: &[
            CommandId::EDIT_COPY,
            CommandId::EDIT_PASTE,
            CommandId::EDIT_BATCH_EDIT,
            CommandId::EDIT_PREFERENCES,
        ],
    },
    Menu {
        title_key: "menu-view",
        mnemonic: 'V',
        items: &[
            CommandId::VIEW_GRID,
            CommandId::VIEW_LIST,
            CommandId::VIEW_DETAIL,
            CommandId::VIEW_ZOOM_IN,
            CommandId::VIEW_ZOOM_OUT,
        ],
    },
    Menu {
        title_key: "menu-filter",
        mnemonic: 'S',
        items: &[
            CommandId::FILTER_BY_TYPE,
            CommandId::FILTER_BY_DATE,
            CommandId::FILTER_BY_SIZE,
            CommandId::FILTER_BY_TAG,
        ],
    },
    Menu {
        title_key: "menu-tools",
        mnemonic: 'T',
        items: &[
            CommandId::TOOLS_BATCH_PROCESS,
            CommandId::TOOLS_METADATA_EDIT,
            CommandId::TOOLS_PLUGINS,
        ],
    },
    Menu {
        title_key: "menu-help",
        mnemonic: 'H',
        items: &[
            CommandId::HELP_TUTORIAL,
            CommandId::HELP_ABOUT,
            CommandId::HELP_CHECK_UPDATE,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommandRegistry;

    #[test]
    fn test_every_item_is_registered() {
        let registry = CommandRegistry::with_defaults();
        for menu in MENUS.iter() {
            for id in menu.items {
                assert!(registry.contains(id), "{} is not registered", id);
            }
        }
    }

    #[test]
    fn test_menu_order() {
        let mnemonics: String = MENUS.iter().map(|m| m.mnemonic).collect();
        assert_eq!(mnemonics, "FEVSTH");
        assert_eq!(MENUS[2].items[0], CommandId::VIEW_GRID);
        assert_eq!(MENUS[2].items.len(), 5);
    }
}
