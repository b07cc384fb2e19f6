//! Fallback content for when the bot API is unreachable.
//!
//! The storefront never shows an empty page because of a dead backend:
//! every fetch in `crate::botapi` degrades to the catalog and page copy
//! defined here. The same data seeds a fresh deployment before the bot
//! admin has filled anything in.

use toymix_core::{Category, Price, ProductId};

use crate::models::content::{
    AboutPageContent, AboutStat, AboutValue, BlogPost, DeliveryColor, DeliveryOption,
    DeliveryPageContent, DeliveryStep, FaqItem, PaymentMethod, SiteContent, SiteSettings,
    TeamMember,
};
use crate::models::product::Toy;

/// The built-in catalog shown when the product API is down.
#[must_use]
pub fn fallback_toys() -> Vec<Toy> {
    vec![
        Toy {
            id: ProductId::new(1),
            name: "Magnitli Konstruktor 100 dona".to_string(),
            description: "Bolalar tasavvurini rivojlantirish uchun rangli magnitli detallar \
                          to'plami. Yuqori sifatli ABS plastikdan tayyorlangan, magnitlari juda \
                          kuchli."
                .to_string(),
            price: Price::new(350_000),
            category: Category::Construction,
            image: "https://images.unsplash.com/photo-1585366119957-e9730b6d0f60?auto=format&fit=crop&q=80&w=600".to_string(),
            images: Vec::new(),
            rating: 4.8,
            reviews_count: 128,
            age_range: "3-10 yosh".to_string(),
            in_stock: 45,
            discount: None,
            colors: vec![
                "#FF6B6B".to_string(),
                "#4D96FF".to_string(),
                "#FFD93D".to_string(),
            ],
            is_new: false,
            is_popular: true,
        },
        Toy {
            id: ProductId::new(2),
            name: "Gapiradigan Ayiqcha Teddy".to_string(),
            description: "Yumshoq va do'stona ayiqcha. U 5 xil qo'shiq aytadi va bolangizning \
                          ismini takrorlashi mumkin."
                .to_string(),
            price: Price::new(120_000),
            category: Category::Soft,
            image: "https://images.unsplash.com/photo-1559440666-3f945637b0c4?auto=format&fit=crop&q=80&w=600".to_string(),
            images: Vec::new(),
            rating: 4.5,
            reviews_count: 45,
            age_range: "0-3 yosh".to_string(),
            in_stock: 30,
            discount: None,
            colors: vec!["#D2B48C".to_string(), "#F5F5DC".to_string()],
            is_new: false,
            is_popular: true,
        },
        Toy {
            id: ProductId::new(3),
            name: "Robot-Panda Aqlli Hamroh".to_string(),
            description: "Dasturlash asoslarini o'rgatuvchi aqlli robot panda. Ovozli \
                          buyruqlarni bajaradi va raqsga tushadi."
                .to_string(),
            price: Price::new(450_000),
            category: Category::Tech,
            image: "https://images.unsplash.com/photo-1531608139434-1912ae0713cd?auto=format&fit=crop&q=80&w=600".to_string(),
            images: Vec::new(),
            rating: 4.9,
            reviews_count: 89,
            age_range: "8+ yosh".to_string(),
            in_stock: 12,
            discount: None,
            colors: vec!["#FFFFFF".to_string(), "#000000".to_string()],
            is_new: true,
            is_popular: false,
        },
        Toy {
            id: ProductId::new(4),
            name: "Lego City Politsiya Markazi".to_string(),
            description: "Klassik konstruktor to'plami. Bolalarda mantiqiy fikrlash va nozik \
                          motorikani rivojlantiradi."
                .to_string(),
            price: Price::new(280_000),
            category: Category::Boys,
            image: "https://images.unsplash.com/photo-1584447128309-b66b7a4d1b63?auto=format&fit=crop&q=80&w=600".to_string(),
            images: Vec::new(),
            rating: 4.7,
            reviews_count: 210,
            age_range: "4-7 yosh".to_string(),
            in_stock: 25,
            discount: None,
            colors: vec!["#003366".to_string(), "#FFFFFF".to_string()],
            is_new: false,
            is_popular: false,
        },
        Toy {
            id: ProductId::new(5),
            name: "Barbie Orzuidagi Uy".to_string(),
            description: "3 qavatli, 8 ta xonali va liftli qo'g'irchoqlar uyi. Barcha \
                          aksessuarlari bilan birga."
                .to_string(),
            price: Price::new(600_000),
            category: Category::Girls,
            image: "https://images.unsplash.com/photo-1596461404969-9ae70f2830c1?auto=format&fit=crop&q=80&w=600".to_string(),
            images: Vec::new(),
            rating: 4.6,
            reviews_count: 76,
            age_range: "4-7 yosh".to_string(),
            in_stock: 8,
            discount: Some(15),
            colors: vec!["#FFC0CB".to_string(), "#FFFFFF".to_string()],
            is_new: false,
            is_popular: false,
        },
    ]
}

/// Default site settings.
#[must_use]
pub fn default_settings() -> SiteSettings {
    SiteSettings {
        phone: "+998 90 123 45 67".to_string(),
        email: "info@toymix.uz".to_string(),
        address: "Toshkent sh., Chilonzor t.".to_string(),
        working_hours: "Har kuni 9:00 - 21:00".to_string(),
        instagram_url: "https://instagram.com/toymix.uz".to_string(),
        telegram_url: "https://t.me/toymix_uz".to_string(),
        whatsapp_url: "https://wa.me/998901234567".to_string(),
        promo_banner_text: "300,000 so'mdan yuqori xaridlar uchun yetkazib berish bepul! 🚚"
            .to_string(),
        free_delivery_threshold: 300_000,
        site_description: "ToyMix — O'zbekistondagi eng yaxshi bolalar o'yinchoqlari onlayn \
                           do'koni. Sifatli, xavfsiz va ta'limiy mahsulotlar. Toshkent va barcha \
                           viloyatlarga yetkazib berish."
            .to_string(),
    }
}

/// Default about page content.
#[must_use]
pub fn default_about() -> AboutPageContent {
    AboutPageContent {
        hero_title: "ToyMix Haqida — O'zbekistondagi Bolalar O'yinchoqlari Do'koni".to_string(),
        hero_description: "ToyMix — O'zbekistondagi eng ishonchli bolalar o'yinchoqlari onlayn \
                           do'koni. Biz har bir bolaning tabassumini qadrlaymiz. Sifatli, \
                           xavfsiz va ta'limiy o'yinchoqlar."
            .to_string(),
        mission_text: "Har bir bolaga sifatli, xavfsiz va rivojlantiruvchi o'yinchoqlarni \
                       yetkazish. Biz bolalarning quvonchi va ota-onalarning xotirjamligini \
                       ta'minlaymiz."
            .to_string(),
        stats: vec![
            AboutStat {
                number: "5000+".to_string(),
                label: "Mamnun mijozlar".to_string(),
            },
            AboutStat {
                number: "500+".to_string(),
                label: "Mahsulotlar".to_string(),
            },
            AboutStat {
                number: "3 yil".to_string(),
                label: "Tajriba".to_string(),
            },
            AboutStat {
                number: "24/7".to_string(),
                label: "Qo'llab-quvvatlash".to_string(),
            },
        ],
        values: vec![
            AboutValue {
                title: "Xavfsizlik".to_string(),
                description: "Barcha o'yinchoqlarimiz xalqaro xavfsizlik standartlariga javob \
                              beradi. Bolalar uchun 100% xavfsiz materiallardan tayyorlangan."
                    .to_string(),
                icon_name: "shield".to_string(),
            },
            AboutValue {
                title: "Sifat".to_string(),
                description: "Faqat eng yaxshi brendlar va ishonchli ishlab chiqaruvchilardan \
                              mahsulotlar tanlaymiz."
                    .to_string(),
                icon_name: "heart".to_string(),
            },
            AboutValue {
                title: "Mijozlar uchun".to_string(),
                description: "Har bir mijozimiz biz uchun muhim. Tezkor yetkazish va doimiy \
                              qo'llab-quvvatlash kafolatlanadi."
                    .to_string(),
                icon_name: "users".to_string(),
            },
        ],
        team_members: vec![
            TeamMember {
                name: "Aziz Karimov".to_string(),
                role: "Asoschisi".to_string(),
                image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=200".to_string(),
            },
            TeamMember {
                name: "Madina Rahimova".to_string(),
                role: "Mahsulot menejeri".to_string(),
                image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200".to_string(),
            },
            TeamMember {
                name: "Sardor Toshev".to_string(),
                role: "Yetkazib berish bo'limi".to_string(),
                image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=200".to_string(),
            },
        ],
    }
}

/// Default delivery page content.
#[must_use]
pub fn default_delivery() -> DeliveryPageContent {
    DeliveryPageContent {
        hero_title: "O'yinchoqlarni Yetkazib Berish — Toshkent va Viloyatlarga".to_string(),
        hero_description: "Tez va ishonchli yetkazib berish xizmati. Toshkent bo'ylab 24 \
                           soatda, viloyatlarga 2-3 ish kunida"
            .to_string(),
        delivery_options: vec![
            DeliveryOption {
                title: "Toshkent shahri bo'ylab".to_string(),
                items: vec![
                    "24 soat ichida yetkaziladi".to_string(),
                    "300,000 so'mdan yuqori — bepul".to_string(),
                    "300,000 gacha — 25,000 so'm".to_string(),
                ],
                color: DeliveryColor::Blue,
            },
            DeliveryOption {
                title: "Viloyatlarga".to_string(),
                items: vec![
                    "2-3 ish kuni ichida".to_string(),
                    "Pochta orqali".to_string(),
                    "Narxi: 30,000 - 50,000 so'm".to_string(),
                ],
                color: DeliveryColor::Red,
            },
        ],
        steps: vec![
            DeliveryStep {
                step: "1".to_string(),
                title: "Tanlang".to_string(),
                description: "O'yinchoqni tanlang va savatga qo'shing".to_string(),
            },
            DeliveryStep {
                step: "2".to_string(),
                title: "Buyurtma bering".to_string(),
                description: "Ma'lumotlarni to'ldiring va tasdiqlang".to_string(),
            },
            DeliveryStep {
                step: "3".to_string(),
                title: "Yetkazamiz".to_string(),
                description: "Tez va xavfsiz yetkazib beramiz".to_string(),
            },
            DeliveryStep {
                step: "4".to_string(),
                title: "Quvoning!".to_string(),
                description: "Farzandingiz yangi o'yinchoqdan zavqlansin".to_string(),
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                title: "Naqd pul".to_string(),
                description: "Yetkazib berilganda to'lash".to_string(),
                icon_name: "cash".to_string(),
            },
            PaymentMethod {
                title: "Karta orqali".to_string(),
                description: "Uzcard, Humo, Visa, MasterCard".to_string(),
                icon_name: "card".to_string(),
            },
            PaymentMethod {
                title: "Click / Payme".to_string(),
                description: "Onlayn to'lov tizimlari".to_string(),
                icon_name: "phone".to_string(),
            },
        ],
        faq: vec![
            FaqItem {
                question: "Buyurtmani qanday kuzataman?".to_string(),
                answer: "Buyurtma berganingizdan so'ng SMS orqali kuzatish raqami yuboriladi."
                    .to_string(),
            },
            FaqItem {
                question: "Qaytarish mumkinmi?".to_string(),
                answer: "Ha, mahsulot yetkazilganidan keyin 3 kun ichida qaytarish mumkin \
                         (qutisi ochilmagan bo'lsa)."
                    .to_string(),
            },
            FaqItem {
                question: "Yetkazib berish bepulmi?".to_string(),
                answer: "300,000 so'mdan yuqori buyurtmalar uchun Toshkent bo'ylab yetkazish \
                         bepul!"
                    .to_string(),
            },
            FaqItem {
                question: "Viloyatlarga qancha vaqtda yetadi?".to_string(),
                answer: "Viloyatlarga pochta orqali 2-3 ish kuni ichida yetkaziladi.".to_string(),
            },
        ],
    }
}

/// Default blog posts.
#[must_use]
pub fn default_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "b1".to_string(),
            title: "O'yinchoq tanlashda nimalarga e'tibor berish kerak?".to_string(),
            excerpt: "Bolaning yoshi va qiziqishlariga mos o'yinchoq tanlash bo'yicha \
                      mutaxassis maslahatlari."
                .to_string(),
            content: None,
            image: "https://images.unsplash.com/photo-1516627145497-ae6968895b74?auto=format&fit=crop&q=80&w=600".to_string(),
            date: "12-May, 2024".to_string(),
            author: "Dr. Madina".to_string(),
        },
        BlogPost {
            id: "b2".to_string(),
            title: "Nima uchun sifatli o'yinchoq muhim?".to_string(),
            excerpt: "Xavfsiz materiallar va bolalar salomatligi o'rtasidagi bog'liqlik haqida."
                .to_string(),
            content: None,
            image: "https://images.unsplash.com/photo-1566004113932-578598e05c6b?auto=format&fit=crop&q=80&w=600".to_string(),
            date: "10-May, 2024".to_string(),
            author: "Aziza Rahimova".to_string(),
        },
    ]
}

/// Full default site content, assembled from the section defaults.
#[must_use]
pub fn default_site_content() -> SiteContent {
    SiteContent {
        settings: default_settings(),
        about: default_about(),
        delivery: default_delivery(),
        blog_posts: default_blog_posts(),
    }
}
