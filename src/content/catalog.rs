//! Compiled-in site catalog.
//!
//! To add portfolio media: YouTube entries take the video id from the
//! `watch?v=` parameter; mp4 entries point at a short optimized clip under
//! `/videos/`; image entries are stills for photography or fallbacks.

use super::{
    Category, HeroContent, InstagramCarousel, Media, NavLink, Orientation, ProcessStep, Service, SiteContent,
    Testimonial, WorkItem,
};

const QUOTE_PRICE: &str = "Packages available — request a quote";

pub(super) fn build() -> SiteContent {
    SiteContent {
        nav_links: nav_links(),
        hero: hero(),
        services: services(),
        process_steps: process_steps(),
        testimonials: testimonials(),
        brands: strings(&[
            "Turo",
            "FYidoctors",
            "CrossIron Mills",
            "New Chapter",
            "Lagostina",
            "HomeSense",
            "Kohinoor Jewellers",
        ]),
        work: portfolio_work(),
        carousels: carousels(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?auto=format&fit=crop&q=80&w=800")
}

fn nav_links() -> Vec<NavLink> {
    [
        ("Work", "#work"),
        ("Services", "#services"),
        ("Process", "#process"),
        ("About", "#about"),
        ("Testimonials", "#testimonials"),
    ]
    .into_iter()
    .map(|(name, href)| NavLink { name: name.to_owned(), href: href.to_owned() })
    .collect()
}

fn hero() -> HeroContent {
    HeroContent {
        headline: "Cinematic Reels & Brand Content for Influencers and Small Businesses in Calgary".to_owned(),
        subheadline: "I shoot, edit, color grade, and deliver scroll-stopping IG Reels & TikTok ads.".to_owned(),
        badges: strings(&["25+ campaigns delivered", "Fast turnaround", "Calgary-based"]),
    }
}

fn service(id: &str, title: &str, price: &str, description: &str, included: &[&str]) -> Service {
    Service {
        id: id.to_owned(),
        title: title.to_owned(),
        price: price.to_owned(),
        description: description.to_owned(),
        included: strings(included),
    }
}

fn services() -> Vec<Service> {
    vec![
        service(
            "1",
            "Influencer Ad Campaign Reel",
            QUOTE_PRICE,
            "End-to-end production (shoot + edit) for impactful Instagram & TikTok ads.",
            &[
                "Pre-production planning & shot list",
                "On-location shoot + Professional editing",
                "Typical turnaround: 2-5 days",
            ],
        ),
        service(
            "2",
            "TikTok + IG Bundle",
            QUOTE_PRICE,
            "Maximizing content yield with optimized ratios and pacing for both platforms.",
            &[
                "Multiple short-form cuts & hooks",
                "Trend-based editing native to platform",
                "Typical turnaround: 3-5 days",
            ],
        ),
        service(
            "3",
            "Event Highlights",
            "Custom pricing based on scope",
            "Cinematic recap video capturing the essence of your intimate event or launch.",
            &[
                "Up to 4 hours of event coverage",
                "2-5 min cinematic highlight reel & audio",
                "Typical turnaround: 5-7 days",
            ],
        ),
        service(
            "4",
            "Photo Session",
            QUOTE_PRICE,
            "High-quality brand photography suitable for websites, PR, and social media grids.",
            &[
                "1-2 hour on-location shoot",
                "Retouched final high-res images",
                "Typical turnaround: 2-4 days",
            ],
        ),
    ]
}

fn process_steps() -> Vec<ProcessStep> {
    [
        ("01", "Discovery", "We align on your brand identity, target audience, and specific campaign goals."),
        (
            "02",
            "Shot List",
            "I construct a detailed shot list ensuring we capture every essential angle and hook.",
        ),
        (
            "03",
            "Production",
            "The main event—shooting your cinematic content on location with professional gear.",
        ),
        ("04", "Edit & Color", "Transforming raw footage into a polished, scroll-stopping narrative."),
        ("05", "Revision", "One round of focused revisions to ensure the final product hits the mark."),
        ("06", "Delivery", "Final broadcast-ready files delivered within 2-5 typical turnaround days."),
    ]
    .into_iter()
    .map(|(number, title, description)| ProcessStep {
        number: number.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
    })
    .collect()
}

fn testimonials() -> Vec<Testimonial> {
    [
        (
            "1",
            "Client A",
            "Local Business Owner",
            "Nitheesh completely transformed our online presence. His attention to detail and cinematic style is unmatched in Calgary.",
        ),
        (
            "2",
            "Client B",
            "Fitness Influencer",
            "The workflow was effortless. Fast turnaround, crisp editing, and the engagement on the resulting Reels has been insane.",
        ),
        (
            "3",
            "Client C",
            "Event Coordinator",
            "He managed to capture the exact vibe of our exclusive launch event without being intrusive. Simply professional.",
        ),
    ]
    .into_iter()
    .map(|(id, name, role, content)| Testimonial {
        id: id.to_owned(),
        name: name.to_owned(),
        role: role.to_owned(),
        content: content.to_owned(),
        avatar: format!("https://i.pravatar.cc/150?u={id}"),
    })
    .collect()
}

struct WorkSeed {
    id: &'static str,
    title: &'static str,
    category: Category,
    brand: &'static str,
    year: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    photo: &'static str,
    orientation: Orientation,
}

impl WorkSeed {
    /// Still-image entry whose media is its own thumbnail.
    fn image(self) -> WorkItem {
        let src = unsplash(self.photo);
        self.with_media(Media::Image { src, alt: None })
    }

    fn with_media(self, media: Media) -> WorkItem {
        WorkItem {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            category: self.category,
            brand: Some(self.brand.to_owned()),
            year: Some(self.year.to_owned()),
            description: Some(self.description.to_owned()),
            tags: strings(self.tags),
            thumbnail_url: unsplash(self.photo),
            orientation: self.orientation,
            media,
        }
    }
}

#[allow(clippy::too_many_lines)]
fn portfolio_work() -> Vec<WorkItem> {
    use Category::{BrandCampaigns, CreativeModelWork, EventsFestivals, Photography, YoutubeCinematic};
    use Orientation::{Horizontal, Vertical};

    vec![
        WorkSeed {
            id: "1",
            title: "Turo Summer Campaign",
            category: BrandCampaigns,
            brand: "Turo",
            year: "2024",
            description: "Energetic and visually stunning campaign highlighting premium vehicle rentals for summer road trips. Delivered across multiple social channels.",
            tags: &["IG Reel", "TikTok"],
            photo: "1549317661-bd32c8ce0db2",
            orientation: Vertical,
        }
        .with_media(Media::Mp4 {
            src: "https://www.w3schools.com/html/mov_bbb.mp4".to_owned(),
            poster: Some(unsplash("1549317661-bd32c8ce0db2")),
        }),
        WorkSeed {
            id: "2",
            title: "FYidoctors Designer Frames",
            category: BrandCampaigns,
            brand: "FYidoctors",
            year: "2023",
            description: "A fast-paced, trendy showcase of new designer frame collections, tailored for TikTok and Instagram Reels.",
            tags: &["TikTok", "IG Reel"],
            photo: "1574258495973-f010dfbb5371",
            orientation: Vertical,
        }
        .with_media(Media::Youtube { id: "dQw4w9WgXcQ".to_owned() }),
        WorkSeed {
            id: "8",
            title: "Calgary Stampede Highlights",
            category: EventsFestivals,
            brand: "Tourism Calgary",
            year: "2023",
            description: "High-energy event recap capturing the sights, sounds, and excitement of the Greatest Outdoor Show on Earth.",
            tags: &["YouTube"],
            photo: "1533174000255-b44c205763ee",
            orientation: Horizontal,
        }
        .with_media(Media::Youtube { id: "dQw4w9WgXcQ".to_owned() }),
        WorkSeed {
            id: "3",
            title: "CrossIron Mills Holiday Haul",
            category: BrandCampaigns,
            brand: "CrossIron Mills",
            year: "2023",
            description: "Dynamic shopping experience capturing the festive atmosphere and premium retailers at CrossIron Mills.",
            tags: &[],
            photo: "1517486808906-6ca8b3f04846",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "4",
            title: "Lagostina Premium Cookware",
            category: BrandCampaigns,
            brand: "Lagostina",
            year: "2024",
            description: "Cinematic culinary content emphasizing the durability and striking aesthetic of Lagostina's premium cookware line.",
            tags: &[],
            photo: "1584990347449-a1c87eb57ea6",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "5",
            title: "HomeSense Seasonal Refresh",
            category: BrandCampaigns,
            brand: "HomeSense",
            year: "2023",
            description: "Showcasing affordable, stylish seasonal decor finds in a highly engaging short-form format.",
            tags: &[],
            photo: "1616486338812-3dadae4b4ace",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "6",
            title: "Kohinoor Jewellers Collection",
            category: BrandCampaigns,
            brand: "Kohinoor Jewellers",
            year: "2024",
            description: "Elegant macro videography highlighting the intricate details of luxury bridal jewelry pieces.",
            tags: &[],
            photo: "1599643478514-4a11011d31ed",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "7",
            title: "New Chapter Wellness",
            category: BrandCampaigns,
            brand: "New Chapter",
            year: "2024",
            description: "A calming lifestyle routine integrating natural supplements into daily wellness practices.",
            tags: &[],
            photo: "1584308666744-24d5e478ce13",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "9",
            title: "Fashion Week Backstage",
            category: EventsFestivals,
            brand: "Local Designers",
            year: "2024",
            description: "A gritty, fast-paced documentary style look at the chaos and beauty behind the runway.",
            tags: &[],
            photo: "1509631179647-0c11573e32bd",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "10",
            title: "Neon Nights Urban Editorial",
            category: CreativeModelWork,
            brand: "Independent",
            year: "2023",
            description: "Moody, cyberpunk-inspired model shoot focusing on creative lighting and streetwear.",
            tags: &[],
            photo: "1515886657613-9f3515b0c78f",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "11",
            title: "Kyoto After Dark",
            category: YoutubeCinematic,
            brand: "Nebulatic",
            year: "2023",
            description: "A cinematic visual journey through the neon-lit streets of Kyoto, Japan. Focusing on atmosphere and sound design.",
            tags: &[],
            photo: "1493976040374-85c8e12f0c0e",
            orientation: Horizontal,
        }
        .image(),
        WorkSeed {
            id: "12",
            title: "The Art of Coffee",
            category: YoutubeCinematic,
            brand: "Nebulatic",
            year: "2023",
            description: "A short documentary-style sequence exploring local craft coffee culture.",
            tags: &[],
            photo: "1497935586351-b67a49e012bf",
            orientation: Horizontal,
        }
        .image(),
        WorkSeed {
            id: "13",
            title: "Editorial Brand Shoot",
            category: Photography,
            brand: "Private Client",
            year: "2024",
            description: "Studio editorial photography for a boutique fashion brand's summer catalog.",
            tags: &[],
            photo: "1555243896-771a337c7ee0",
            orientation: Vertical,
        }
        .image(),
        WorkSeed {
            id: "14",
            title: "Automotive Precision",
            category: Photography,
            brand: "Private Client",
            year: "2023",
            description: "High-contrast automotive photography highlighting vehicle curves and design.",
            tags: &[],
            photo: "1603584173870-7f23fdae1b7a",
            orientation: Horizontal,
        }
        .image(),
    ]
}

fn carousels() -> Vec<InstagramCarousel> {
    [
        ("Ebony Jepson", "DCGDrh_JwDA", "ebony-1.jpeg", "Model Shoot | Outdoor", "2024"),
        ("Ebony Jepson", "DCA0GsHP8SB", "ebony-2.jpeg", "Model Shoot | Outdoor", "2024"),
        ("Ebony Jepson", "CtjjwBFR_92", "ebony-3.jpeg", "Model Shoot | Outdoor", "2024"),
        ("Aparna", "DM4IYm8x2U-", "aparna-1.jpeg", "Casual Shoot | Tulip Fields", "2024"),
        ("Aparna", "DBKxz28PSB2", "aparna-2.jpeg", "Casual Shoot | Outdoor", "2025"),
        ("Anniko", "CpcqRXXr5sq", "anniko.jpeg", "Editorial", "2024"),
        ("Carmenian", "CtImyvSOH0D", "carmenian.jpg", "Portrait | Studio", "2024"),
        ("Justin", "Cpnjo_svTHB", "justin.jpeg", "Model Shoot | Studio", "2024"),
        ("Kat", "CtdOOdvOiLs", "kat-1.jpeg", "Model Shoot | Outdoor", "2024"),
        ("Kat", "CtdB9QgRPaf", "kat-2.jpeg", "Model Shoot | Outdoor", "2024"),
        ("Lisa Naveed", "Cpk6umtv-R9", "lisa-1.jpeg", "Fashion", "2024"),
        ("Lisa Naveed", "Cpk4zmXJ9fd", "lisa-2.jpeg", "Fashion", "2024"),
        ("Paige", "Cpp9K8sJ4um", "paige.jpeg", "Model Shoot | Studio", "2024"),
        ("Scarlett Elliott", "CwTmFVDPWl5", "scarlett-1.jpg", "Model Shoot | Studio", "2024"),
        ("Scarlett Elliott", "CvOI-loJkTt", "scarlett-2.jpg", "Model Shoot | Studio", "2024"),
        ("Scarlett Elliott", "CtJzaegrBPK", "scarlett-3.jpg", "Model Shoot | Studio", "2024"),
        ("Scarlett Elliott", "CtRjU7tRV8O", "scarlett-4.jpg", "Model Shoot | Studio", "2024"),
        ("Sophia", "CpZR2PjOnOR", "sophia-1.jpeg", "Model Shoot | Studio", "2024"),
        ("Sophia", "CpZTXituwLW", "sophia-2.jpeg", "Model Shoot | Studio", "2024"),
        ("Taker", "CpicSoFPUEO", "taker.jpeg", "Model Shoot | Studio", "2024"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, key, file, tag, date))| InstagramCarousel {
        id: (idx + 1).to_string(),
        title: title.to_owned(),
        post_url_key: key.to_owned(),
        thumbnail_url: format!("/assets/ig/{file}"),
        shoot_tag: Some(tag.to_owned()),
        date: Some(date.to_owned()),
    })
    .collect()
}
