//! Static content tables used to generate mock catalog records.

use crate::domain::Category;

/// Per-category content
#[derive(Debug, Clone, Copy)]
pub struct CategoryContent {
    pub category: Category,
    /// Search keywords; the first four become record tags
    pub keywords: &'static [&'static str],
    pub titles: &'static [&'static str],
    pub description: &'static str,
}

/// Number of leading keywords copied into a record's tags
pub const TAGS_PER_VIDEO: usize = 4;

pub static CATEGORY_CONTENT: [CategoryContent; 6] = [
    CategoryContent {
        category: Category::Technology,
        keywords: &["tech", "ai", "programming", "code", "developer", "科技", "编程", "AI"],
        titles: &[
            "最新AI技术突破解析",
            "Web开发最佳实践指南",
            "云计算技术深度解读",
            "区块链应用场景探讨",
        ],
        description: "深入探讨最新科技发展趋势，分析技术原理和应用场景，帮助开发者提升技术视野。",
    },
    CategoryContent {
        category: Category::Entertainment,
        keywords: &["movie", "game", "fun", "entertainment", "电影", "游戏", "娱乐"],
        titles: &[
            "年度最佳电影盘点",
            "热门游戏深度评测",
            "电影幕后制作揭秘",
            "游戏开发技术分享",
        ],
        description: "为您带来精彩的娱乐内容，包括影视、游戏等多个领域的深度解析和评测。",
    },
    CategoryContent {
        category: Category::Education,
        keywords: &["tutorial", "learn", "education", "course", "教程", "教育", "学习"],
        titles: &[
            "零基础编程入门教程",
            "数据结构与算法详解",
            "设计模式实战应用",
            "机器学习基础课程",
        ],
        description: "系统化的教学内容，从基础到进阶，帮助学习者掌握实用技能和知识。",
    },
    CategoryContent {
        category: Category::Music,
        keywords: &["music", "song", "audio", "音乐", "歌曲"],
        titles: &[
            "古典音乐欣赏指南",
            "现代音乐制作技巧",
            "音乐理论基础教学",
            "乐器演奏技巧分享",
        ],
        description: "音乐爱好者的天堂，包含音乐欣赏、理论知识、演奏技巧等丰富内容。",
    },
    CategoryContent {
        category: Category::Sports,
        keywords: &["sport", "football", "basketball", "体育", "足球", "篮球"],
        titles: &[
            "NBA赛季精彩回顾",
            "足球战术分析讲解",
            "运动健身训练指南",
            "极限运动精彩瞬间",
        ],
        description: "体育赛事精彩集锦和专业分析，让您不错过任何精彩瞬间。",
    },
    CategoryContent {
        category: Category::News,
        keywords: &["news", "report", "新闻", "报道"],
        titles: &[
            "本周科技新闻汇总",
            "全球经济形势分析",
            "重大事件深度报道",
            "行业发展趋势解读",
        ],
        description: "及时准确的新闻报道，深度解读热点事件，把握时事脉搏。",
    },
];

pub const SAMPLE_VIDEOS: [&str; 8] = [
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
];

pub const THUMBNAILS: [&str; 8] = [
    "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&q=80",
    "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=800&q=80",
    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=800&q=80",
    "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=800&q=80",
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&q=80",
    "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=800&q=80",
    "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=800&q=80",
];

/// Renditions attached to every generated record, highest first
pub const QUALITY_LADDER: [(&str, &str); 3] = [
    ("1080p", "1920x1080"),
    ("720p", "1280x720"),
    ("480p", "854x480"),
];

/// Look up the content table for a category
pub fn content_for(category: Category) -> &'static CategoryContent {
    CATEGORY_CONTENT
        .iter()
        .find(|c| c.category == category)
        .unwrap_or(&CATEGORY_CONTENT[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_content() {
        for category in Category::ALL {
            let content = content_for(category);
            assert_eq!(content.category, category);
            assert!(!content.titles.is_empty());
            assert!(content.keywords.len() >= TAGS_PER_VIDEO);
        }
    }
}
