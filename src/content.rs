//! Marketing copy shown on the landing page.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const VIMEO_HASH: &str = "65aecc4477";

pub const PORTFOLIO: &[&str] = &["906404181", "912372127", "483161961", "480793119"];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Branded Content",
        description: "Compelling stories that connect your brand with your audience",
    },
    Service {
        title: "Brand Documentaries",
        description: "Deep-dive narratives that showcase your company's journey",
    },
    Service {
        title: "Narrative & Doc Films",
        description: "Cinematic storytelling with emotional depth and impact",
    },
    Service {
        title: "Corporate Shoots",
        description: "Professional production for internal and external communications",
    },
    Service {
        title: "Commercials",
        description: "High-impact ads that drive engagement and conversions",
    },
    Service {
        title: "Full Production",
        description: "From concept development to final delivery",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with Andrew and his team was seamless...I would highly recommend them to anyone and look forward to working with them again in the future.",
        author: "Black Enterprise",
    },
    Testimonial {
        quote: "Working with this production company had been absolutely TREMENDOUS. I commissioned them for my second documentary and the customer service/professionalism is nothing short of exemplary. I recommend them for any of your production needs.",
        author: "History Before Us",
    },
    Testimonial {
        quote: "We are truly blessed to have an incredible local film community of talented creatives. A1 Day1 Productions is one of those companies that not only provides quality services, but generously shares FREE content and resources to local artists who wish to expand their brand or personal business.",
        author: "Mike Lamb",
    },
    Testimonial {
        quote: "Working with this team was an absolute joy!!!! They were professional and extremely creative. They took our idea and elevated and actually made it more of us then we did. I certainly can not wait to work with this amazing team again. Definitely not disappointed. They made it a memorable experience.",
        author: "Fionna B",
    },
];
