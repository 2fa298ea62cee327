//! Student (học viên / sinh viên) screenshots.

use super::RoleTables;
use crate::ordering::{hide, show};

pub(super) static TABLES: RoleTables = RoleTables {
    renames: RENAMES,
    descriptions: DESCRIPTIONS,
    english: ENGLISH,
    ordering: &[
        show("Trang chủ.png"),
        show("Đăng ký.png"),
        show("Đăng nhập.png"),
        show("Hộp thoại chat.png"),
        show("Giao diện chatbot.png"),
        hide("Các khóa học tham gia.png"),
        show("Danh sách khóa học.png"),
        show("Chi tiết khóa học.png"),
        hide("Đăng ký khóa học.png"),
        show("Thanh toán ZaloPay.png"),
        show("Chi tiết nội dung học video.png"),
        show("Chi tiết nội dung học văn bản.png"),
        show("Chi tiết nội dung học slide.png"),
        show("Chi tiết nội dung học làm trắc nghiệm.png"),
        show("Chi tiết nội dung học làm bài tập.png"),
        hide("Chi tiết nội dung học xem tài liệu.png"),
        hide("Các lớp học trực tuyến.png"),
        show("Tham gia học trực tuyến.png"),
        hide("Trang cá nhân.png"),
        show("Trang cá nhân tiến độ học.png"),
        show("Trang cá nhân bảng điểm.png"),
        show("Trang cá nhân chứng chỉ.png"),
        show("Trang cá nhân thanh toán.png"),
        show("Thông báo.png"),
        show("Thông báo mail.png"),
        show("Tìm kiếm thông tin.png"),
        show("Danh sách giảng viên.png"),
        hide("Thông tin chi tiết giảng viên.png"),
        show("Các bài tập và trắc nghiệm.png"),
        show("Nộp bài tập.png"),
        show("Kết quả bài tập.png"),
        show("Làm bài trắc nghiệm.png"),
        show("Hiển thị điểm và đáp án.png"),
        hide("Các diễn đàn.png"),
        show("Chi tiết diễn đàn.png"),
    ],
};

/// Slug file name -> labelled file name.
const RENAMES: &[(&str, &str)] = &[
    ("dangky.png", "Đăng ký.png"),
    ("dangnhap.png", "Đăng nhập.png"),
    ("trangcanhan(thanhtoan).png", "Trang cá nhân thanh toán.png"),
    ("trangcanhan(bangdiem).png", "Trang cá nhân bảng điểm.png"),
    ("trangcanhan(chungchi).png", "Trang cá nhân chứng chỉ.png"),
    ("trangcanhan(tiendohoc).png", "Trang cá nhân tiến độ học.png"),
    ("trangcanhan.png", "Trang cá nhân.png"),
    ("chitietnoidunghoc(lambaitap).png", "Chi tiết nội dung học làm bài tập.png"),
    ("chitietnoidunghoc(txt).png", "Chi tiết nội dung học văn bản.png"),
    ("chitietnoidunghoc(xemtailieu).png", "Chi tiết nội dung học xem tài liệu.png"),
    ("chitietnoidunghoc(lamtracnghiem).png", "Chi tiết nội dung học làm trắc nghiệm.png"),
    ("chitietnoidunghoc(slide).png", "Chi tiết nội dung học slide.png"),
    ("chitietnoidunghoc(video).png", "Chi tiết nội dung học video.png"),
    ("cackhoahocthamgia.png", "Các khóa học tham gia.png"),
    ("thamgiahoc.png", "Tham gia học.png"),
    ("caclophoctructuyen.png", "Các lớp học trực tuyến.png"),
    ("thongtinchitietgiangvien.png", "Thông tin chi tiết giảng viên.png"),
    ("ketquabaitap.png", "Kết quả bài tập.png"),
    ("nopbaitap.png", "Nộp bài tập.png"),
    ("thongbao.png", "Thông báo.png"),
    ("hienthidiemvadapan.png", "Hiển thị điểm và đáp án.png"),
    ("lambaitracnghiem.png", "Làm bài trắc nghiệm.png"),
    ("cacbaitapvatracnghiem.png", "Các bài tập và trắc nghiệm.png"),
    ("chatbot.png", "Giao diện chatbot.png"),
    ("timkiemthongtin.png", "Tìm kiếm thông tin.png"),
    ("chatbox.png", "Hộp thoại chat.png"),
    ("chitietdiendan.png", "Chi tiết diễn đàn.png"),
    ("cacdiendan.png", "Các diễn đàn.png"),
    ("cacgiangvien.png", "Danh sách giảng viên.png"),
    ("thanhtoanzalopay.png", "Thanh toán ZaloPay.png"),
    ("dangkykhoahoc.png", "Đăng ký khóa học.png"),
    ("chitietkhoahoc.png", "Chi tiết khóa học.png"),
    ("cackhoahoc.png", "Danh sách khóa học.png"),
    ("trangchu.png", "Trang chủ.png"),
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Trang chủ.png",
        "Màn hình chính của hệ thống, cung cấp cái nhìn tổng quan về toàn bộ hoạt động học tập, thông báo mới nhất, các khóa học nổi bật và các chức năng truy cập nhanh. Người dùng có thể dễ dàng theo dõi tiến độ học tập, nhận thông báo quan trọng, truy cập nhanh vào các lớp học, bài tập, diễn đàn hoặc các tài liệu học tập. Đây là điểm khởi đầu giúp học viên, giảng viên và quản trị viên định hướng các hoạt động tiếp theo một cách thuận tiện và hiệu quả.",
    ),
    (
        "Trang cá nhân tiến độ học.png",
        "Màn hình cho phép học viên theo dõi tiến độ học tập của mình qua từng khóa học, từng phần học, bài tập và trắc nghiệm. Học viên có thể biết được mình đã hoàn thành bao nhiêu phần trăm nội dung, còn những mục nào chưa hoàn thành và nhận nhắc nhở khi cần thiết.",
    ),
    (
        "Trang cá nhân thanh toán.png",
        "Màn hình hiển thị chi tiết các khoản thanh toán, lịch sử giao dịch, trạng thái học phí và các khoản phí khác của học viên. Người dùng có thể kiểm tra, tải hóa đơn, thực hiện thanh toán trực tuyến và nhận thông báo khi có thay đổi về tài chính. Chức năng này giúp học viên chủ động quản lý tài chính học tập.",
    ),
    (
        "Trang cá nhân chứng chỉ.png",
        "Màn hình hiển thị danh sách các chứng chỉ mà học viên đã đạt được sau khi hoàn thành khóa học. Học viên có thể tải về chứng chỉ, xem chi tiết thông tin và chia sẻ thành tích lên mạng xã hội. Chức năng này giúp ghi nhận và khích lệ thành tích học tập.",
    ),
    (
        "Trang cá nhân bảng điểm.png",
        "Màn hình tổng hợp kết quả học tập của học viên, bao gồm điểm số từng bài tập, bài kiểm tra, trắc nghiệm và điểm tổng kết các khóa học. Học viên có thể xem chi tiết từng mục, nhận nhận xét từ giảng viên và theo dõi tiến độ học tập của mình qua từng giai đoạn.",
    ),
    (
        "Tìm kiếm thông tin.png",
        "Màn hình tìm kiếm toàn bộ nội dung trong hệ thống, bao gồm khóa học, bài học, tài liệu, giảng viên, diễn đàn và thông báo. Học viên có thể sử dụng bộ lọc nâng cao để tìm kiếm nhanh và chính xác.",
    ),
    (
        "Thông báo.png",
        "Màn hình tổng hợp tất cả các thông báo quan trọng từ hệ thống, giảng viên hoặc quản trị viên.",
    ),
    (
        "Thông báo mail.png",
        "Đồng thời tích hợp gửi thông báo qua email. Người dùng có thể xem chi tiết từng thông báo, đánh dấu đã đọc, lọc theo loại thông báo (học tập, tài chính, sự kiện, v.v.), nhận thông báo đẩy khi có tin mới, và nhận email để đảm bảo thông tin được truyền tải kịp thời. Chức năng này giúp duy trì kết nối hiệu quả giữa hệ thống và người dùng.",
    ),
    (
        "Thanh toán ZaloPay.png",
        "Màn hình hỗ trợ học viên thanh toán học phí hoặc các khoản phí khác qua ZaloPay. Người dùng có thể quét mã QR, kiểm tra trạng thái giao dịch, nhận hóa đơn điện tử và lịch sử thanh toán. Chức năng này giúp quá trình thanh toán trở nên nhanh chóng, an toàn và minh bạch.",
    ),
    (
        "Tham gia học trực tuyến.png",
        "Màn hình cho phép học viên tham gia các lớp học trực tuyến thông qua Google Meet, tích hợp hệ thống điểm danh tự động và theo dõi thời gian học tập. Học viên có thể kết nối vào phiên học, xem thông tin chi tiết về lịch học, và hệ thống sẽ ghi nhận sự hiện diện cũng như thời lượng tham gia của họ, đảm bảo quản lý hiệu quả quá trình học tập.",
    ),
    (
        "Nộp bài tập.png",
        "Màn hình cho phép học viên nộp bài tập trực tuyến, tải lên file, nhập nội dung trả lời, kiểm tra thời hạn nộp và nhận phản hồi từ giảng viên. Ngoài ra, học viên có thể xem lại các bài đã nộp, chỉnh sửa trước hạn chót, nhận thông báo khi có điểm hoặc nhận xét. Chức năng này giúp quá trình nộp và chấm bài tập trở nên minh bạch, thuận tiện và tiết kiệm thời gian.",
    ),
    (
        "Làm bài trắc nghiệm.png",
        "Màn hình cho phép học viên thực hiện các bài kiểm tra trắc nghiệm trực tuyến với nhiều dạng câu hỏi khác nhau. Học viên có thể xem thời gian làm bài, chọn đáp án, nộp bài và nhận kết quả ngay sau khi hoàn thành. Ngoài ra, hệ thống còn hỗ trợ lưu tạm thời, xem lại đáp án, nhận nhận xét từ giảng viên và thống kê kết quả. Chức năng này giúp đánh giá năng lực học viên một cách khách quan, nhanh chóng và hiệu quả.",
    ),
    (
        "Kết quả bài tập.png",
        "Màn hình tổng hợp kết quả các bài tập đã nộp, điểm số, nhận xét của giảng viên và trạng thái hoàn thành. Học viên có thể xem lại bài đã nộp, nhận phản hồi chi tiết và cải thiện kết quả học tập.",
    ),
    (
        "Hiển thị điểm và đáp án.png",
        "Màn hình hiển thị chi tiết điểm số và đáp án đúng của các bài kiểm tra trắc nghiệm. Học viên có thể so sánh đáp án của mình với đáp án đúng, nhận nhận xét và rút kinh nghiệm cho các lần kiểm tra sau.",
    ),
    (
        "Đăng nhập.png",
        "Màn hình đăng nhập được thiết kế dành cho học viên và sinh viên trong hệ thống eLearning. Tại đây, học viên/sinh viên nhập tên đăng nhập và mật khẩu để truy cập vào các chức năng học tập như xem nội dung khóa học, làm bài tập, tham gia diễn đàn, và theo dõi tiến độ cá nhân. Chức năng này đảm bảo an toàn, bảo mật và phân quyền truy cập phù hợp với vai trò của họ trong hệ thống.",
    ),
    (
        "Đăng ký.png",
        "Màn hình cho phép học viên đăng ký tài khoản mới bằng cách nhập thông tin cá nhân, email, số điện thoại và thiết lập mật khẩu. Sau khi đăng ký thành công, học viên có thể truy cập vào hệ thống để bắt đầu quá trình học tập. Chức năng này giúp mở rộng đối tượng người dùng và đảm bảo quy trình đăng ký minh bạch, thuận tiện.",
    ),
    (
        "Chi tiết nội dung học video.png",
        "Màn hình phát video bài giảng với các tính năng điều chỉnh tốc độ, tua nhanh/chậm, bật/tắt phụ đề và ghi chú. Học viên có thể học mọi lúc, mọi nơi và chủ động kiểm soát quá trình học.",
    ),
    (
        "Chi tiết nội dung học văn bản.png",
        "Màn hình trình bày nội dung bài học dạng văn bản, hỗ trợ định dạng phong phú, chèn hình ảnh, bảng biểu và liên kết. Học viên có thể đọc, ghi chú, đánh dấu nội dung quan trọng và tìm kiếm thông tin nhanh chóng.",
    ),
    (
        "Chi tiết nội dung học slide.png",
        "Màn hình trình chiếu bài giảng dạng slide, hỗ trợ chuyển trang, phóng to/thu nhỏ, ghi chú và tải về slide. Học viên có thể học tập trực quan, dễ tiếp thu kiến thức.",
    ),
    (
        "Chi tiết nội dung học làm trắc nghiệm.png",
        "Màn hình cung cấp bài kiểm tra trắc nghiệm trong nội dung học, với nhiều dạng câu hỏi, tính năng lưu tạm, xem lại đáp án và nhận kết quả ngay sau khi nộp. Học viên có thể luyện tập, kiểm tra kiến thức và nhận phản hồi tức thì.",
    ),
    (
        "Chi tiết nội dung học làm bài tập.png",
        "Màn hình hiển thị chi tiết một bài tập trong nội dung học, bao gồm yêu cầu, hướng dẫn, tài liệu tham khảo và nút nộp bài. Học viên có thể đọc kỹ yêu cầu, tải tài liệu, làm bài và nộp trực tiếp trên hệ thống.",
    ),
    (
        "Chi tiết khóa học.png",
        "Màn hình này cung cấp thông tin chi tiết về một khóa học cụ thể, bao gồm mô tả, mục tiêu, nội dung các phần học, danh sách bài tập, trắc nghiệm, tài liệu tham khảo và thông tin giảng viên phụ trách. Học viên có thể xem tiến độ học, đăng ký hoặc hủy đăng ký khóa học, tải tài liệu, đặt câu hỏi cho giảng viên và tham gia các hoạt động tương tác. Đây là nơi tập trung mọi thông tin và hoạt động liên quan đến một khóa học.",
    ),
    (
        "Chi tiết diễn đàn.png",
        "Màn hình hiển thị chi tiết một chủ đề thảo luận trong diễn đàn, bao gồm nội dung chủ đề, các bình luận, phản hồi từ học viên và giảng viên. Người dùng có thể đăng bài mới, trả lời, trích dẫn, đính kèm file, và nhận thông báo khi có phản hồi mới. Chức năng này tạo môi trường trao đổi học thuật sôi nổi, giúp học viên giải đáp thắc mắc và học hỏi lẫn nhau.",
    ),
    (
        "Hộp thoại chat.png",
        "Màn hình hộp thoại chat cho phép học viên, giảng viên và quản trị viên trao đổi trực tiếp, gửi tin nhắn, file, hình ảnh và nhận thông báo khi có tin nhắn mới.",
    ),
    (
        "Giao diện chatbot.png",
        "Màn hình trò chuyện với chatbot hỗ trợ học tập, cho phép học viên đặt câu hỏi, tìm kiếm tài liệu, nhận hướng dẫn sử dụng hệ thống hoặc giải đáp thắc mắc về bài học.",
    ),
    (
        "Danh sách khóa học.png",
        "Màn hình tổng hợp tất cả các khóa học trong hệ thống, hỗ trợ tìm kiếm, lọc theo chuyên ngành, trạng thái, giảng viên phụ trách và đăng ký nhanh.",
    ),
    (
        "Danh sách giảng viên.png",
        "Màn hình hiển thị danh sách tất cả giảng viên trong hệ thống, cho phép học viên xem thông tin, tìm kiếm theo chuyên ngành, liên hệ hoặc gửi phản hồi.",
    ),
    (
        "Các bài tập và trắc nghiệm.png",
        "Màn hình tổng hợp tất cả các bài tập và bài kiểm tra trắc nghiệm cần hoàn thành trong từng khóa học. Học viên có thể theo dõi hạn nộp, trạng thái hoàn thành và truy cập nhanh vào từng bài.",
    ),
];

/// Labelled stem -> README caption.
const ENGLISH: &[(&str, &str)] = &[
    ("Hộp thoại chat", "Chat Dialog"),
    ("Trang cá nhân", "Personal Page"),
    ("Trang cá nhân tiến độ học", "Personal Page - Learning Progress"),
    ("Trang cá nhân thanh toán", "Personal Page - Payment"),
    ("Trang cá nhân chứng chỉ", "Personal Page - Certificates"),
    ("Trang cá nhân bảng điểm", "Personal Page - Grade Table"),
    ("Tìm kiếm thông tin", "Search Information"),
    ("Thông tin chi tiết giảng viên", "Lecturer Details"),
    ("Thông báo mail", "Email Notifications"),
    ("Thanh toán ZaloPay", "ZaloPay Payment"),
    ("Nộp bài tập", "Submit Assignment"),
    ("Làm bài trắc nghiệm", "Take Quiz"),
    ("Kết quả bài tập", "Assignment Results"),
    ("Hiển thị điểm và đáp án", "Display Scores and Answers"),
    ("Giao diện chatbot", "Chatbot Interface"),
    ("Danh sách giảng viên", "Lecturer List"),
    ("Đăng nhập", "Login"),
    ("Đăng ký", "Register"),
    ("Đăng ký khóa học", "Course Registration"),
    ("Chi tiết nội dung học video", "Learning Content Details - Video"),
    ("Chi tiết nội dung học văn bản", "Learning Content Details - Text"),
    ("Chi tiết nội dung học slide", "Learning Content Details - Slides"),
    ("Chi tiết nội dung học làm bài tập", "Learning Content Details - Assignment"),
    ("Chi tiết nội dung học làm trắc nghiệm", "Learning Content Details - Quiz"),
    ("Chi tiết nội dung học xem tài liệu", "Learning Content Details - View Document"),
    ("Chi tiết diễn đàn", "Forum Details"),
    ("Các lớp học trực tuyến", "Online Classes"),
    ("Các khóa học tham gia", "Enrolled Courses"),
    ("Các diễn đàn", "Forums"),
    ("Các bài tập và trắc nghiệm", "Assignments and Quizzes"),
    ("Chi tiết khóa học", "Course Details"),
    ("Danh sách khóa học", "Course List"),
    ("Trang chủ", "Homepage"),
    ("Thông báo", "Notifications"),
    ("Tham gia học trực tuyến", "Join Online Learning"),
];
