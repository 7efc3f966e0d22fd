/// A portfolio card's media. Videos carry a poster image that stands in
/// for them in the card grid.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Media {
    Image(&'static str),
    Video {
        src: &'static str,
        poster: &'static str,
    },
}

impl Media {
    /// Path shown in the card grid; the overlay decides image vs player.
    pub fn thumbnail(&self) -> &'static str {
        match self {
            Media::Image(src) => src,
            Media::Video { poster, .. } => poster,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub media: Media,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq)]
pub struct PricingTier {
    pub title: &'static str,
    pub price: &'static str,
    pub items: &'static [&'static str],
    pub note: &'static str,
}

pub struct Contacts {
    pub telegram: &'static str,
    pub email: &'static str,
    pub discord_server: &'static str,
    pub discord_user: &'static str,
}

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        title: "Interworlder Mask",
        desc: "Mask in a hand-painted style",
        media: Media::Image("/portfolio/portfolio-01.jpg"),
        tags: &[],
    },
    PortfolioItem {
        title: "Asuna from SAO",
        desc: "Full character model, untextured",
        media: Media::Image("/portfolio/portfolio-02.jpg"),
        tags: &[],
    },
    PortfolioItem {
        title: "The Watcher",
        desc: "The Watcher from LoFD",
        media: Media::Image("/portfolio/portfolio-03.jpg"),
        tags: &[],
    },
    PortfolioItem {
        title: "Lololoshka, masked",
        desc: "Lololoshka wearing the Interworlder mask",
        media: Media::Image("/portfolio/portfolio-04.jpg"),
        tags: &[],
    },
    PortfolioItem {
        title: "Lololoshka",
        desc: "Lololoshka, cartoon version",
        media: Media::Image("/portfolio/portfolio-05.jpg"),
        tags: &[],
    },
    PortfolioItem {
        title: "Vox",
        desc: "Vox from Hazbin Hotel",
        media: Media::Image("/portfolio/portfolio-06.jpg"),
        tags: &[],
    },
];

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Game mechanics",
        desc: "Combat, abilities, combos, character states (no jumping or \
               casting mid-swing), animation sync, knockback, damage, UI logic.",
        tags: &["Roblox", "Lua", "Game Systems"],
    },
    Service {
        title: "3D modeling",
        desc: "Assets, props, characters. Optimized for in-game use, clean \
               geometry, prepared for import.",
        tags: &["Blender", "Assets", "Optimization"],
    },
    Service {
        title: "Animation / rigging",
        desc: "Combat sets, locomotion, rig/skinning and export for your pipeline.",
        tags: &["Rig", "Animation", "Export"],
    },
];

pub static PRICING: [PricingTier; 3] = [
    PricingTier {
        title: "Small fix / tweak",
        price: "from $5-10",
        items: &[
            "Fix a bug",
            "Small logic adjustment",
            "Minor UI/script edit",
            "1-2 revision rounds",
        ],
        note: "Perfect for quick tasks.",
    },
    PricingTier {
        title: "System / mechanic",
        price: "from $15-50",
        items: &[
            "Combo / combat / ability",
            "States (jump/attack locks)",
            "Effects, timings, balance",
            "Testing and polish",
        ],
        note: "Price depends on complexity and scope.",
    },
    PricingTier {
        title: "Project package",
        price: "negotiable",
        items: &[
            "Several systems",
            "UI + logic",
            "Integration into your project",
            "Long-term support",
        ],
        note: "For long-running projects this is the cheaper, calmer option.",
    },
];

pub static CONTACTS: Contacts = Contacts {
    telegram: "https://t.me/monoalr",
    email: "musaevtamerlan35@gmail.com",
    discord_server: "https://discord.gg/KqSpDWUX",
    discord_user: "mono_alr",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnails_resolve_for_both_media_kinds() {
        let image = Media::Image("/portfolio/portfolio-01.jpg");
        assert_eq!(image.thumbnail(), "/portfolio/portfolio-01.jpg");

        let clip = Media::Video {
            src: "/portfolio/reel.mp4",
            poster: "/portfolio/reel-poster.jpg",
        };
        assert_eq!(clip.thumbnail(), "/portfolio/reel-poster.jpg");
    }

    #[test]
    fn gallery_is_populated() {
        assert_eq!(PORTFOLIO.len(), 6);
        for item in &PORTFOLIO {
            assert!(!item.title.is_empty());
            assert!(item.media.thumbnail().starts_with("/portfolio/"));
        }
        assert_eq!(CONTACTS.discord_user, "mono_alr");
    }
}
